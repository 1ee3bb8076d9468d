//! Seams to the rest of the game server. The VIP commands only ever talk to
//! the world, the store and the network through these traits.

use async_trait::async_trait;

use crate::error::PersistenceError;
use crate::player::{Player, PlayerId, SharedPlayer, VipStatus};

/// Lookup of characters currently in the world.
pub trait PlayerRegistry: Send + Sync {
    /// Case-insensitive lookup by character name.
    fn player_by_name(&self, name: &str) -> Option<SharedPlayer>;

    fn player_by_id(&self, id: PlayerId) -> Option<SharedPlayer>;
}

/// Durable VIP record per character.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Upsert the VIP record of one character in a single round trip.
    async fn save_vip(&self, player_id: PlayerId, status: VipStatus)
    -> Result<(), PersistenceError>;

    async fn load_vip(&self, player_id: PlayerId) -> Result<Option<VipStatus>, PersistenceError>;
}

/// Packets sent straight to one character's client.
#[async_trait]
pub trait PlayerNotifier: Send + Sync {
    /// Re-send the character profile (name, title, colors) to everyone who can see it.
    async fn broadcast_user_info(&self, player: &Player) -> anyhow::Result<()>;

    async fn send_status_update(&self, player: &Player) -> anyhow::Result<()>;

    async fn send_ability_list(&self, player: &Player) -> anyhow::Result<()>;

    async fn send_message(&self, player_id: PlayerId, text: &str) -> anyhow::Result<()>;
}

/// The channel every connected administrator listens on.
#[async_trait]
pub trait AdminNotifier: Send + Sync {
    async fn broadcast_to_admins(&self, text: &str) -> anyhow::Result<()>;
}

/// Grants and removes the bonus ability set tied to VIP status.
pub trait AbilityService: Send + Sync {
    fn grant_vip_abilities(&self, player: &mut Player);

    fn revoke_vip_abilities(&self, player: &mut Player);
}

/// Ability service backed by the ability ids listed in the VIP policy.
#[derive(Clone, Debug, Default)]
pub struct PolicyAbilities {
    abilities: Vec<u32>,
}

impl PolicyAbilities {
    pub fn new(abilities: Vec<u32>) -> Self {
        Self { abilities }
    }
}

impl AbilityService for PolicyAbilities {
    fn grant_vip_abilities(&self, player: &mut Player) {
        player.bonus_abilities.extend(self.abilities.iter().copied());
    }

    fn revoke_vip_abilities(&self, player: &mut Player) {
        for ability in &self.abilities {
            player.bonus_abilities.remove(ability);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AbilityService, PolicyAbilities};
    use crate::player::{Player, PlayerId};

    #[test]
    fn grants_and_revokes_only_policy_abilities() {
        let abilities = PolicyAbilities::new(vec![7041, 7042]);
        let mut player = Player::new(PlayerId(1), "Bob");
        player.bonus_abilities.insert(1);

        abilities.grant_vip_abilities(&mut player);
        assert_eq!(player.bonus_abilities.len(), 3);

        abilities.revoke_vip_abilities(&mut player);
        assert_eq!(player.bonus_abilities.into_iter().collect::<Vec<_>>(), vec![1]);
    }
}
