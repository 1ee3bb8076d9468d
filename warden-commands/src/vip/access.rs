use tracing::warn;

use warden_core::{Player, VipError, VipPolicy};

use crate::vip::notify::{Notifier, unauthorized_audit};

/// Decides whether an actor may manage VIP status.
#[derive(Clone, Copy, Debug)]
pub struct AccessGate<'a> {
    policy: &'a VipPolicy,
}

impl<'a> AccessGate<'a> {
    pub fn new(policy: &'a VipPolicy) -> Self {
        Self { policy }
    }

    pub fn permits(&self, actor: &Player) -> bool {
        if self.policy.override_privilege_check {
            return true;
        }

        actor.access_level >= self.policy.required_level && actor.is_gm
    }

    /// Like [`AccessGate::permits`], but a denial is reported to every
    /// administrator exactly once and returned as [`VipError::AccessDenied`].
    pub async fn authorize(&self, actor: &Player, notifier: &Notifier<'_>) -> Result<(), VipError> {
        if self.permits(actor) {
            return Ok(());
        }

        warn!(
            actor_id = %actor.id,
            access_level = actor.access_level,
            is_gm = actor.is_gm,
            "unauthorized vip command"
        );
        notifier.audit(&unauthorized_audit(&actor.name)).await;

        Err(VipError::AccessDenied {
            actor: actor.name.clone(),
        })
    }
}
