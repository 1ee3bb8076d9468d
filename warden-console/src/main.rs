mod console;

use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;
use sqlx::postgres::PgPoolOptions;

use warden_core::{Data, LiveWorld, PolicyAbilities, VipPolicy};
use warden_database::{CacheService, Database, MIGRATOR};
use warden_utils::env::env_bool;
use warden_utils::formatting::format_color;

use crate::console::ConsoleNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")?;

    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    info!("PostgreSQL connection established.");

    let redis_enabled = env_bool("REDIS_ENABLED", false);
    let redis_key_prefix =
        env::var("REDIS_KEY_PREFIX").unwrap_or_else(|_| "warden:prod".to_string());

    let cache = if redis_enabled {
        match env::var("REDIS_URL") {
            Ok(redis_url) => match CacheService::redis(&redis_url, redis_key_prefix.clone()) {
                Ok(cache) => {
                    info!(key_prefix = %redis_key_prefix, "Redis cache enabled.");
                    cache
                }
                Err(err) => {
                    warn!(
                        ?err,
                        key_prefix = %redis_key_prefix,
                        "Failed to initialize Redis cache; continuing with DB-only mode."
                    );
                    CacheService::disabled(redis_key_prefix.clone())
                }
            },
            Err(_) => {
                warn!(
                    key_prefix = %redis_key_prefix,
                    "REDIS_ENABLED=true but REDIS_URL is missing; continuing with DB-only mode."
                );
                CacheService::disabled(redis_key_prefix.clone())
            }
        }
    } else {
        info!("Redis cache disabled (set REDIS_ENABLED=true to enable).");
        CacheService::disabled(redis_key_prefix.clone())
    };

    if cache.is_redis_enabled() {
        if let Err(err) = cache.ping().await {
            warn!(
                ?err,
                "Redis cache ping failed; cache operations will continue with fallback behavior."
            );
        } else {
            info!("Redis cache health check passed.");
        }
    }

    let db = Database::with_cache(db_pool, cache);

    let auto_run_migrations = env_bool("AUTO_RUN_MIGRATIONS", true);
    if auto_run_migrations {
        MIGRATOR.run(db.pool()).await?;
        info!("Database migrations applied.");
    } else {
        info!("Auto migrations disabled (set AUTO_RUN_MIGRATIONS=true to run at startup).");
    }

    let policy = VipPolicy::from_env();
    info!(
        required_level = policy.required_level,
        override_privilege_check = policy.override_privilege_check,
        name_color = %format_color(policy.name_color),
        title_color = %format_color(policy.title_color),
        recolor_gate = ?policy.recolor_gate,
        vip_abilities = policy.vip_abilities.len(),
        "VIP policy loaded."
    );

    let world = LiveWorld::new();
    let notifier = Arc::new(ConsoleNotifier);
    let data = Data {
        abilities: Arc::new(PolicyAbilities::new(policy.vip_abilities.clone())),
        policy: Arc::new(policy),
        registry: Arc::new(world.clone()),
        store: Arc::new(db.clone()),
        players: notifier.clone(),
        admins: notifier,
    };

    console::load_world(&db, &data, &world).await?;

    info!("Warden console ready; enter `<character>: <command>` lines.");
    console::run(&data, &world).await
}
