use std::sync::Arc;

use tracing::debug;

use warden_core::{PlayerRegistry, SharedPlayer, TargetRef, VipError};

/// Picks the character a VIP command applies to.
///
/// Precedence: an explicitly named online character, then the actor's
/// selected target when that target is a character, then the actor. The
/// returned handle is not locked; its state may change before the caller
/// mutates it.
#[derive(Clone, Copy)]
pub struct TargetResolver<'a> {
    registry: &'a dyn PlayerRegistry,
}

impl<'a> TargetResolver<'a> {
    pub fn new(registry: &'a dyn PlayerRegistry) -> Self {
        Self { registry }
    }

    pub async fn resolve(
        &self,
        actor: &SharedPlayer,
        explicit_name: Option<&str>,
    ) -> Result<SharedPlayer, VipError> {
        if let Some(name) = explicit_name {
            return self
                .registry
                .player_by_name(name)
                .ok_or_else(|| VipError::TargetNotFound(name.to_owned()));
        }

        let selected = actor.read().await.target;
        if let Some(TargetRef::Player(id)) = selected {
            if let Some(player) = self.registry.player_by_id(id) {
                return Ok(player);
            }
            debug!(target_id = %id, "selected character left the world; using actor");
        }

        Ok(Arc::clone(actor))
    }
}
