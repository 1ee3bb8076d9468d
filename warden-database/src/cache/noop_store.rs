/// Backend used when Redis is disabled: every read misses, every write is dropped,
/// so callers always fall through to PostgreSQL.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCacheStore;

impl NoopCacheStore {
    pub async fn get(&self, _key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(None)
    }

    pub async fn set(
        &self,
        _key: &str,
        _payload: Vec<u8>,
        _ttl_seconds: u64,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    pub async fn del(&self, _key: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
