use anyhow::Context as _;
use tracing::warn;

use crate::cache::{VIP_CACHE_TTL, invalidate_vip, vip_key};
use crate::database::Database;
use crate::model::vip::VipRecord;

#[derive(sqlx::FromRow)]
struct VipRow {
    vip: i16,
    vip_end: i64,
}

/// Upsert the VIP columns of one character.
///
/// The pooled connection is held only for the single statement and goes back
/// to the pool when it drops, on success and on error alike.
pub async fn save_vip_record(
    db: &Database,
    player_id: u32,
    active: bool,
    expires_at: i64,
) -> anyhow::Result<()> {
    let mut conn = db
        .pool()
        .acquire()
        .await
        .context("failed to acquire database connection")?;

    sqlx::query(
        "INSERT INTO character_vip (obj_id, vip, vip_end)
         VALUES ($1, $2, $3)
         ON CONFLICT (obj_id) DO UPDATE SET vip = EXCLUDED.vip, vip_end = EXCLUDED.vip_end",
    )
    .bind(i64::from(player_id))
    .bind(i16::from(active))
    .bind(expires_at)
    .execute(&mut *conn)
    .await
    .with_context(|| format!("failed to upsert vip record for player {player_id}"))?;

    drop(conn);

    if let Err(source) = invalidate_vip(db.cache(), player_id).await {
        warn!(?source, player_id = player_id, "failed to invalidate cached vip record");
    }

    Ok(())
}

pub async fn load_vip_record(db: &Database, player_id: u32) -> anyhow::Result<Option<VipRecord>> {
    let cache_key = vip_key(db.cache(), player_id);
    db.cache()
        .get_or_load_json(&cache_key, VIP_CACHE_TTL, || async {
            let row: Option<VipRow> =
                sqlx::query_as("SELECT vip, vip_end FROM character_vip WHERE obj_id = $1")
                    .bind(i64::from(player_id))
                    .fetch_optional(db.pool())
                    .await?;

            Ok(row.map(|row| VipRecord {
                player_id,
                active: row.vip != 0,
                expires_at: row.vip_end,
            }))
        })
        .await
}
