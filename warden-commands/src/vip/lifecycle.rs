use tracing::{error, info};

use warden_core::{
    AbilityService, Data, Player, PlayerStore, RecolorGate, SharedPlayer, VipPolicy, VipStatus,
};
use warden_utils::time::{expires_after_days, now_unix_secs};

use crate::vip::notify::{Notifier, congratulation_message, grant_audit, revoke_audit};

/// Grant and revoke transitions of a character's VIP status.
///
/// The in-memory update happens first and the store write second; a failed
/// write is logged and the in-memory state is kept as is. Locks on the actor
/// and the target are never held at the same time, so the actor may be its
/// own target.
pub struct VipLifecycle<'a> {
    policy: &'a VipPolicy,
    store: &'a dyn PlayerStore,
    abilities: &'a dyn AbilityService,
    notifier: Notifier<'a>,
}

impl<'a> VipLifecycle<'a> {
    pub fn new(data: &'a Data) -> Self {
        Self {
            policy: data.policy.as_ref(),
            store: data.store.as_ref(),
            abilities: data.abilities.as_ref(),
            notifier: Notifier::new(data),
        }
    }

    /// Grant VIP for `days` days from now. `days <= 0` revokes instead.
    pub async fn grant(&self, actor: &SharedPlayer, target: &SharedPlayer, days: i64) -> VipStatus {
        self.grant_at(actor, target, days, now_unix_secs()).await
    }

    pub async fn grant_at(
        &self,
        actor: &SharedPlayer,
        target: &SharedPlayer,
        days: i64,
        now: i64,
    ) -> VipStatus {
        if days <= 0 {
            return self.revoke(actor, target).await;
        }

        let actor_name = actor.read().await.name.clone();
        let status = VipStatus::until(expires_after_days(now, days));
        let (player_id, target_name) = {
            let mut player = target.write().await;
            player.vip = status;
            (player.id, player.name.clone())
        };

        let persisted = match self.store.save_vip(player_id, status).await {
            Ok(()) => true,
            Err(source) => {
                error!(?source, player_id = %player_id, "could not persist granted vip status");
                false
            }
        };

        let recolor = persisted && self.recolor_allowed(actor, target).await;
        let snapshot = {
            let mut player = target.write().await;
            if recolor {
                self.apply_vip_colors(&mut player);
            }
            self.abilities.grant_vip_abilities(&mut player);
            player.clone()
        };

        self.notifier.refresh(&snapshot).await;
        self.notifier.tell(player_id, congratulation_message()).await;
        self.notifier
            .audit(&grant_audit(&actor_name, &target_name, days))
            .await;

        info!(
            actor = %actor_name,
            player_id = %player_id,
            days = days,
            expires_at = snapshot.vip.expires_at,
            persisted = persisted,
            "vip status granted"
        );

        snapshot.vip
    }

    /// Remove VIP status. Safe to call on a character that is not VIP.
    pub async fn revoke(&self, actor: &SharedPlayer, target: &SharedPlayer) -> VipStatus {
        let actor_name = actor.read().await.name.clone();
        let (player_id, target_name) = {
            let mut player = target.write().await;
            player.vip = VipStatus::inactive();
            (player.id, player.name.clone())
        };

        let persisted = match self.store.save_vip(player_id, VipStatus::inactive()).await {
            Ok(()) => true,
            Err(source) => {
                error!(?source, player_id = %player_id, "could not persist revoked vip status");
                false
            }
        };

        let snapshot = {
            let mut player = target.write().await;
            player.appearance.name_color = self.policy.default_color;
            player.appearance.title_color = self.policy.default_color;
            self.abilities.revoke_vip_abilities(&mut player);
            player.clone()
        };

        self.notifier.refresh(&snapshot).await;
        self.notifier
            .audit(&revoke_audit(&actor_name, &target_name))
            .await;

        info!(
            actor = %actor_name,
            player_id = %player_id,
            persisted = persisted,
            "vip status revoked"
        );

        snapshot.vip
    }

    /// Apply a stored VIP record to a character entering the world.
    ///
    /// The record is taken verbatim; nothing here compares `expires_at` with
    /// the clock.
    pub fn restore(&self, player: &mut Player, status: VipStatus) {
        player.vip = status;
        if status.active {
            self.apply_vip_colors(player);
            self.abilities.grant_vip_abilities(player);
        }
    }

    async fn recolor_allowed(&self, actor: &SharedPlayer, target: &SharedPlayer) -> bool {
        match self.policy.recolor_gate {
            RecolorGate::Actor => actor.read().await.is_vip(),
            RecolorGate::Target => target.read().await.is_vip(),
        }
    }

    fn apply_vip_colors(&self, player: &mut Player) {
        if self.policy.name_color_enabled {
            player.appearance.name_color = self.policy.name_color;
        }
        if self.policy.title_color_enabled {
            player.appearance.title_color = self.policy.title_color;
        }
    }
}
