pub mod error;
pub mod player;
pub mod policy;
pub mod services;
pub mod world;

use std::sync::Arc;

pub use error::{ParseError, PersistenceError, VipError};
pub use player::{Appearance, DEFAULT_COLOR, Player, PlayerId, SharedPlayer, TargetRef, VipStatus};
pub use policy::{RecolorGate, VipPolicy};
pub use services::{
    AbilityService, AdminNotifier, PlayerNotifier, PlayerRegistry, PlayerStore, PolicyAbilities,
};
pub use world::LiveWorld;

/// Collaborators shared by every VIP command invocation.
#[derive(Clone)]
pub struct Data {
    pub policy: Arc<VipPolicy>,
    pub registry: Arc<dyn PlayerRegistry>,
    pub store: Arc<dyn PlayerStore>,
    pub players: Arc<dyn PlayerNotifier>,
    pub admins: Arc<dyn AdminNotifier>,
    pub abilities: Arc<dyn AbilityService>,
}
