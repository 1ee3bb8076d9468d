use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use warden_commands::vip::lifecycle::VipLifecycle;
use warden_commands::{handle_vip_command, should_route_to_vip};
use warden_core::{
    AdminNotifier, Data, LiveWorld, Player, PlayerId, PlayerNotifier, PlayerRegistry, TargetRef,
    VipStatus,
};
use warden_database::Database;
use warden_database::impls::roster::load_roster;
use warden_utils::formatting::format_color;

/// Prints player packets and administrator broadcasts for the operator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl PlayerNotifier for ConsoleNotifier {
    async fn broadcast_user_info(&self, player: &Player) -> anyhow::Result<()> {
        info!(
            player_id = %player.id,
            name = %player.name,
            name_color = %format_color(player.appearance.name_color),
            title_color = %format_color(player.appearance.title_color),
            "user info broadcast"
        );
        Ok(())
    }

    async fn send_status_update(&self, player: &Player) -> anyhow::Result<()> {
        info!(
            player_id = %player.id,
            vip = player.vip.active,
            expires_at = player.vip.expires_at,
            "status update"
        );
        Ok(())
    }

    async fn send_ability_list(&self, player: &Player) -> anyhow::Result<()> {
        info!(player_id = %player.id, abilities = ?player.bonus_abilities, "ability list");
        Ok(())
    }

    async fn send_message(&self, player_id: PlayerId, text: &str) -> anyhow::Result<()> {
        println!("[to {player_id}] {text}");
        Ok(())
    }
}

#[async_trait]
impl AdminNotifier for ConsoleNotifier {
    async fn broadcast_to_admins(&self, text: &str) -> anyhow::Result<()> {
        println!("[GM] {text}");
        Ok(())
    }
}

/// Put every stored character into the world with its VIP record restored.
pub async fn load_world(db: &Database, data: &Data, world: &LiveWorld) -> anyhow::Result<()> {
    let lifecycle = VipLifecycle::new(data);

    for entry in load_roster(db).await? {
        let player_id = PlayerId(entry.player_id);
        let mut player =
            Player::new(player_id, entry.name).with_access(entry.access_level, entry.is_gm);

        let status = match data.store.load_vip(player_id).await {
            Ok(record) => record.unwrap_or_else(VipStatus::inactive),
            Err(source) => {
                warn!(
                    ?source,
                    player_id = %player_id,
                    "failed to load vip record; entering as non-vip"
                );
                VipStatus::inactive()
            }
        };
        lifecycle.restore(&mut player, status);
        world.enter(player);
    }

    info!(players = world.len(), "world loaded");
    Ok(())
}

/// Read `<character>: <command>` lines from stdin until EOF.
///
/// Besides the VIP commands, `<character>: target <name>` selects another
/// character and `<character>: target` clears the selection.
pub async fn run(data: &Data, world: &LiveWorld) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((actor_name, command)) = line.split_once(':') else {
            warn!(line = line, "expected `<character>: <command>`");
            continue;
        };
        let Some(actor) = world.player_by_name(actor_name.trim()) else {
            warn!(actor = actor_name.trim(), "character is not in the world");
            continue;
        };
        let command = command.trim();

        let mut tokens = command.split_whitespace();
        if tokens.next() == Some("target") {
            let selection = match tokens.next() {
                Some(name) => match world.player_by_name(name) {
                    Some(target) => Some(TargetRef::Player(target.read().await.id)),
                    None => {
                        warn!(selected = name, "character is not in the world");
                        continue;
                    }
                },
                None => None,
            };
            actor.write().await.target = selection;
            continue;
        }

        if !should_route_to_vip(command) {
            warn!(command = command, "unknown command");
            continue;
        }

        let succeeded = handle_vip_command(data, &actor, command).await;
        info!(
            actor = actor_name.trim(),
            command = command,
            succeeded = succeeded,
            "command finished"
        );
    }

    Ok(())
}
