use serde::{Deserialize, Serialize};

/// Stored VIP columns of one character, as read back from `character_vip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipRecord {
    pub player_id: u32,
    pub active: bool,
    pub expires_at: i64,
}
