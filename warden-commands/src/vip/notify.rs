use tracing::warn;

use warden_core::{AdminNotifier, Data, Player, PlayerId, PlayerNotifier};

/// Fan-out to the affected character and to the administrator channel.
///
/// Every send is fire-and-forget: a delivery failure is logged and the
/// command carries on.
#[derive(Clone, Copy)]
pub struct Notifier<'a> {
    players: &'a dyn PlayerNotifier,
    admins: &'a dyn AdminNotifier,
}

impl<'a> Notifier<'a> {
    pub fn new(data: &'a Data) -> Self {
        Self {
            players: data.players.as_ref(),
            admins: data.admins.as_ref(),
        }
    }

    /// Profile broadcast, status update and ability list, in that order.
    pub async fn refresh(&self, player: &Player) {
        if let Err(source) = self.players.broadcast_user_info(player).await {
            warn!(?source, player_id = %player.id, "failed to broadcast user info");
        }
        if let Err(source) = self.players.send_status_update(player).await {
            warn!(?source, player_id = %player.id, "failed to send status update");
        }
        if let Err(source) = self.players.send_ability_list(player).await {
            warn!(?source, player_id = %player.id, "failed to send ability list");
        }
    }

    pub async fn tell(&self, player_id: PlayerId, text: &str) {
        if let Err(source) = self.players.send_message(player_id, text).await {
            warn!(?source, player_id = %player_id, "failed to send player message");
        }
    }

    pub async fn audit(&self, line: &str) {
        if let Err(source) = self.admins.broadcast_to_admins(line).await {
            warn!(?source, "failed to broadcast to administrators");
        }
    }
}

pub fn usage_message(usage: &str) -> String {
    format!("Usage: {usage}")
}

pub fn not_found_message(name: &str) -> String {
    format!("Character {name} was not found.")
}

pub fn congratulation_message() -> &'static str {
    "You are now a VIP, congratulations!"
}

pub fn unauthorized_audit(actor: &str) -> String {
    format!("Player {actor} attempted an unauthorized VIP action")
}

pub fn grant_audit(actor: &str, target: &str, days: i64) -> String {
    format!(
        "GM {actor} set VIP status for player {target} for {}",
        warden_utils::formatting::format_days(days)
    )
}

pub fn revoke_audit(actor: &str, target: &str) -> String {
    format!("GM {actor} removed VIP status of player {target}")
}

#[cfg(test)]
mod tests {
    use super::{grant_audit, not_found_message, revoke_audit, unauthorized_audit, usage_message};

    #[test]
    fn audit_lines_name_everyone_involved() {
        assert_eq!(
            grant_audit("Gandalf", "Bob", 30),
            "GM Gandalf set VIP status for player Bob for 30 day(s)"
        );
        assert_eq!(
            revoke_audit("Gandalf", "Bob"),
            "GM Gandalf removed VIP status of player Bob"
        );
        assert!(unauthorized_audit("Mallory").contains("Mallory"));
    }

    #[test]
    fn user_facing_strings() {
        assert_eq!(usage_message("//removevip [<char_name>]"), "Usage: //removevip [<char_name>]");
        assert_eq!(not_found_message("Ghost"), "Character Ghost was not found.");
    }
}
