use tracing::debug;

use warden_core::{Data, ParseError, SharedPlayer, VipError, VipStatus};

use crate::vip::access::AccessGate;
use crate::vip::command::{VipCommand, VipVerb, parse_command};
use crate::vip::lifecycle::VipLifecycle;
use crate::vip::notify::{Notifier, not_found_message, usage_message};
use crate::vip::target::TargetResolver;

/// Final state of a VIP command that ran to the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VipOutcome {
    pub verb: VipVerb,
    pub status: VipStatus,
}

impl VipOutcome {
    /// A grant succeeded when the target ended up VIP, a removal when it did not.
    pub fn succeeded(&self) -> bool {
        match self.verb {
            VipVerb::SetVip => self.status.active,
            VipVerb::RemoveVip => !self.status.active,
        }
    }
}

pub fn should_route_to_vip(raw: &str) -> bool {
    VipVerb::detect(raw).is_some()
}

/// Gate, parse, resolve and apply one VIP command.
///
/// Nothing is mutated unless the actor is authorized, the line parses and the
/// target resolves.
pub async fn execute_vip_command(
    data: &Data,
    actor: &SharedPlayer,
    raw: &str,
) -> Result<VipOutcome, VipError> {
    let notifier = Notifier::new(data);
    let actor_snapshot = actor.read().await.clone();
    AccessGate::new(&data.policy)
        .authorize(&actor_snapshot, &notifier)
        .await?;

    let command = parse_command(raw)?;
    let target = TargetResolver::new(data.registry.as_ref())
        .resolve(actor, command.explicit_target())
        .await?;

    let lifecycle = VipLifecycle::new(data);
    let status = match command {
        VipCommand::SetVip { days, .. } => lifecycle.grant(actor, &target, days).await,
        VipCommand::RemoveVip { .. } => lifecycle.revoke(actor, &target).await,
    };

    Ok(VipOutcome {
        verb: command.verb(),
        status,
    })
}

/// Run a VIP command and report its result to the command router.
///
/// Usage and not-found problems are told to the actor; the return value is
/// the success flag the router acknowledges with.
pub async fn handle_vip_command(data: &Data, actor: &SharedPlayer, raw: &str) -> bool {
    let Some(verb) = VipVerb::detect(raw) else {
        debug!(command = raw, "not a vip command");
        return false;
    };

    let actor_id = actor.read().await.id;
    let notifier = Notifier::new(data);

    match execute_vip_command(data, actor, raw).await {
        Ok(outcome) => outcome.succeeded(),
        Err(VipError::Parse(ParseError::UnknownVerb(_))) => false,
        Err(VipError::Parse(source)) => {
            debug!(?source, actor_id = %actor_id, "malformed vip command");
            notifier
                .tell(actor_id, &usage_message(verb.meta().usage))
                .await;
            false
        }
        Err(VipError::TargetNotFound(name)) => {
            notifier.tell(actor_id, &not_found_message(&name)).await;
            false
        }
        Err(VipError::AccessDenied { .. }) => false,
    }
}
