use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Name and title color every character carries while not VIP.
pub const DEFAULT_COLOR: u32 = 0xFF_FFFF;

/// Durable object id of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// VIP flag plus the unix time it was granted until. `expires_at` is 0 while inactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipStatus {
    pub active: bool,
    pub expires_at: i64,
}

impl VipStatus {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn until(expires_at: i64) -> Self {
        Self {
            active: true,
            expires_at,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub name_color: u32,
    pub title_color: u32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            name_color: DEFAULT_COLOR,
            title_color: DEFAULT_COLOR,
        }
    }
}

/// What a player currently has selected in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRef {
    Player(PlayerId),
    /// Any non-player world object (monsters, NPCs, doors).
    Object(u32),
}

/// Live character state owned by the world layer.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub access_level: i32,
    pub is_gm: bool,
    pub vip: VipStatus,
    pub appearance: Appearance,
    pub bonus_abilities: BTreeSet<u32>,
    pub target: Option<TargetRef>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            access_level: 0,
            is_gm: false,
            vip: VipStatus::inactive(),
            appearance: Appearance::default(),
            bonus_abilities: BTreeSet::new(),
            target: None,
        }
    }

    pub fn with_access(mut self, access_level: i32, is_gm: bool) -> Self {
        self.access_level = access_level;
        self.is_gm = is_gm;
        self
    }

    pub fn is_vip(&self) -> bool {
        self.vip.active
    }

    pub fn into_shared(self) -> SharedPlayer {
        Arc::new(RwLock::new(self))
    }
}

/// Handle to a live character; locks are only held for the duration of one field update.
pub type SharedPlayer = Arc<RwLock<Player>>;
