//! In-memory collaborators for command tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use warden_core::{
    AdminNotifier, Data, LiveWorld, PersistenceError, Player, PlayerId, PlayerNotifier,
    PlayerStore, PolicyAbilities, SharedPlayer, VipPolicy, VipStatus,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sent {
    UserInfo(PlayerId),
    StatusUpdate(PlayerId),
    AbilityList(PlayerId),
    Message(PlayerId, String),
    Admin(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn push(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl PlayerNotifier for RecordingNotifier {
    async fn broadcast_user_info(&self, player: &Player) -> anyhow::Result<()> {
        self.push(Sent::UserInfo(player.id));
        Ok(())
    }

    async fn send_status_update(&self, player: &Player) -> anyhow::Result<()> {
        self.push(Sent::StatusUpdate(player.id));
        Ok(())
    }

    async fn send_ability_list(&self, player: &Player) -> anyhow::Result<()> {
        self.push(Sent::AbilityList(player.id));
        Ok(())
    }

    async fn send_message(&self, player_id: PlayerId, text: &str) -> anyhow::Result<()> {
        self.push(Sent::Message(player_id, text.to_owned()));
        Ok(())
    }
}

#[async_trait]
impl AdminNotifier for RecordingNotifier {
    async fn broadcast_to_admins(&self, text: &str) -> anyhow::Result<()> {
        self.push(Sent::Admin(text.to_owned()));
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<PlayerId, VipStatus>>,
    saves: Mutex<usize>,
    failing: bool,
}

impl MemoryStore {
    pub fn record(&self, player_id: PlayerId) -> Option<VipStatus> {
        self.records.lock().unwrap().get(&player_id).copied()
    }

    /// Number of save attempts, failed ones included.
    pub fn saves(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl PlayerStore for MemoryStore {
    async fn save_vip(
        &self,
        player_id: PlayerId,
        status: VipStatus,
    ) -> Result<(), PersistenceError> {
        *self.saves.lock().unwrap() += 1;
        if self.failing {
            return Err(PersistenceError::new(player_id, anyhow::anyhow!("database is down")));
        }
        self.records.lock().unwrap().insert(player_id, status);
        Ok(())
    }

    async fn load_vip(&self, player_id: PlayerId) -> Result<Option<VipStatus>, PersistenceError> {
        Ok(self.record(player_id))
    }
}

pub struct Harness {
    pub world: LiveWorld,
    pub notifier: Arc<RecordingNotifier>,
    pub store: Arc<MemoryStore>,
    pub data: Data,
}

impl Harness {
    pub fn new(policy: VipPolicy) -> Self {
        Self::build(policy, MemoryStore::default())
    }

    /// A harness whose store rejects every write.
    pub fn failing(policy: VipPolicy) -> Self {
        Self::build(
            policy,
            MemoryStore {
                failing: true,
                ..MemoryStore::default()
            },
        )
    }

    fn build(policy: VipPolicy, store: MemoryStore) -> Self {
        let world = LiveWorld::new();
        let notifier = Arc::new(RecordingNotifier::default());
        let store = Arc::new(store);
        let abilities = Arc::new(PolicyAbilities::new(policy.vip_abilities.clone()));
        let data = Data {
            policy: Arc::new(policy),
            registry: Arc::new(world.clone()),
            store: store.clone(),
            players: notifier.clone(),
            admins: notifier.clone(),
            abilities,
        };

        Self {
            world,
            notifier,
            store,
            data,
        }
    }

    pub fn enter(&self, player: Player) -> SharedPlayer {
        self.world.enter(player)
    }

    pub fn admin_lines(&self) -> Vec<String> {
        self.notifier
            .sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Admin(line) => Some(line),
                _ => None,
            })
            .collect()
    }
}

/// A character that passes the default access gate.
pub fn gm(id: PlayerId, name: &str) -> Player {
    Player::new(id, name).with_access(VipPolicy::default().required_level, true)
}
