use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::player::{Player, PlayerId, SharedPlayer};
use crate::services::PlayerRegistry;

/// In-memory registry of characters currently in the world.
#[derive(Clone, Debug, Default)]
pub struct LiveWorld {
    players: Arc<DashMap<PlayerId, SharedPlayer>>,
    names: Arc<DashMap<String, PlayerId>>,
}

impl LiveWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a character into the world, replacing any previous entry with the same id.
    pub fn enter(&self, player: Player) -> SharedPlayer {
        let id = player.id;
        let key = player.name.to_lowercase();
        let shared = player.into_shared();

        if self.players.insert(id, shared.clone()).is_some() {
            debug!(player_id = %id, "replacing existing world entry");
            self.names.retain(|_, mapped| *mapped != id);
        }
        match self.names.insert(key, id) {
            Some(previous) if previous != id => {
                debug!(
                    player_id = %id,
                    shadowed = %previous,
                    "name taken over from another character"
                );
            }
            _ => {}
        }

        shared
    }

    pub async fn leave(&self, id: PlayerId) -> Option<SharedPlayer> {
        let (_, shared) = self.players.remove(&id)?;
        let key = shared.read().await.name.to_lowercase();
        self.names.remove_if(&key, |_, mapped| *mapped == id);
        Some(shared)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerRegistry for LiveWorld {
    fn player_by_name(&self, name: &str) -> Option<SharedPlayer> {
        let id = *self.names.get(&name.to_lowercase())?;
        self.player_by_id(id)
    }

    fn player_by_id(&self, id: PlayerId) -> Option<SharedPlayer> {
        self.players.get(&id).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::LiveWorld;
    use crate::player::{Player, PlayerId};
    use crate::services::PlayerRegistry;

    #[tokio::test]
    async fn looks_up_players_case_insensitively() {
        let world = LiveWorld::new();
        world.enter(Player::new(PlayerId(7), "Bob"));

        let found = world.player_by_name("bOB").expect("bob is online");
        assert_eq!(found.read().await.id, PlayerId(7));
        assert!(world.player_by_name("Alice").is_none());
    }

    #[tokio::test]
    async fn leaving_removes_both_indexes() {
        let world = LiveWorld::new();
        world.enter(Player::new(PlayerId(7), "Bob"));

        assert!(world.leave(PlayerId(7)).await.is_some());
        assert!(world.player_by_id(PlayerId(7)).is_none());
        assert!(world.player_by_name("bob").is_none());
        assert!(world.is_empty());
    }

    #[tokio::test]
    async fn reentering_under_a_new_name_drops_the_old_name() {
        let world = LiveWorld::new();
        world.enter(Player::new(PlayerId(7), "Bob"));
        world.enter(Player::new(PlayerId(7), "Robert"));

        assert!(world.player_by_name("bob").is_none());
        let found = world.player_by_name("ROBERT").expect("renamed character is online");
        assert_eq!(found.read().await.name, "Robert");
        assert_eq!(world.len(), 1);

        assert!(world.leave(PlayerId(7)).await.is_some());
        assert!(world.player_by_name("robert").is_none());
    }
}
