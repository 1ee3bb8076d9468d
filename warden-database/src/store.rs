use async_trait::async_trait;

use warden_core::{PersistenceError, PlayerId, PlayerStore, VipStatus};

use crate::database::Database;
use crate::impls::vip::{load_vip_record, save_vip_record};

#[async_trait]
impl PlayerStore for Database {
    async fn save_vip(
        &self,
        player_id: PlayerId,
        status: VipStatus,
    ) -> Result<(), PersistenceError> {
        save_vip_record(self, player_id.get(), status.active, status.expires_at)
            .await
            .map_err(|source| PersistenceError::new(player_id, source))
    }

    async fn load_vip(&self, player_id: PlayerId) -> Result<Option<VipStatus>, PersistenceError> {
        let record = load_vip_record(self, player_id.get())
            .await
            .map_err(|source| PersistenceError::new(player_id, source))?;

        Ok(record.map(|record| VipStatus {
            active: record.active,
            expires_at: record.expires_at,
        }))
    }
}
