use async_trait::async_trait;
use jiff::Timestamp;
use pidforge_core::store::{Store, StoreResult, StoreTx};
use pidforge_core::{Pid, PidKind, StoreError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default, Clone)]
struct MemState {
    seeds: HashMap<PidKind, u64>,
    minted: HashMap<(PidKind, Pid), Timestamp>,
}

/// In-memory store with real transaction semantics.
///
/// A transaction holds the state mutex for its whole lifetime, which gives
/// the same per-kind serialization a SQL backend provides with a seed-row
/// lock. Rollback restores a snapshot taken at `begin`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemState>>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Open transaction over an [`InMemoryStore`]. Holds the state lock; the
/// snapshot is written back on drop unless the transaction committed.
pub struct InMemoryTx {
    guard: OwnedMutexGuard<MemState>,
    snapshot: Option<MemState>,
}

#[async_trait]
impl Store for InMemoryStore {
    type Tx = InMemoryTx;

    async fn begin(&self) -> StoreResult<Self::Tx> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let snapshot = Some((*guard).clone());
        Ok(InMemoryTx { guard, snapshot })
    }

    async fn has_pid(&self, kind: PidKind, pid: &Pid) -> StoreResult<bool> {
        let state = self.state.lock().await;
        Ok(state.minted.contains_key(&(kind, pid.clone())))
    }
}

#[async_trait]
impl StoreTx for InMemoryTx {
    async fn seed(&mut self, kind: PidKind) -> StoreResult<Option<u64>> {
        Ok(self.guard.seeds.get(&kind).copied())
    }

    async fn init_seed(&mut self, kind: PidKind, value: u64) -> StoreResult<()> {
        if self.guard.seeds.contains_key(&kind) {
            return Err(StoreError::Conflict(kind.to_string()));
        }
        self.guard.seeds.insert(kind, value);
        Ok(())
    }

    async fn set_seed(&mut self, kind: PidKind, value: u64) -> StoreResult<()> {
        match self.guard.seeds.get_mut(&kind) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::InvalidData(format!(
                "no seed row to update for kind {kind}"
            ))),
        }
    }

    async fn minted_at(&mut self, kind: PidKind, pid: &Pid) -> StoreResult<Option<Timestamp>> {
        Ok(self.guard.minted.get(&(kind, pid.clone())).copied())
    }

    async fn add_pid(&mut self, kind: PidKind, pid: &Pid, created: Timestamp) -> StoreResult<()> {
        let key = (kind, pid.clone());
        if self.guard.minted.contains_key(&key) {
            return Err(StoreError::Conflict(pid.to_string()));
        }
        self.guard.minted.insert(key, created);
        Ok(())
    }

    async fn commit(mut self) -> StoreResult<()> {
        self.snapshot = None;
        Ok(())
    }
}

impl Drop for InMemoryTx {
    fn drop(&mut self) {
        // Dropping without commit rolls the shared state back to the
        // snapshot taken at begin.
        if let Some(snapshot) = self.snapshot.take() {
            *self.guard = snapshot;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(value: &str) -> Pid {
        Pid::new(value)
    }

    fn ts(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    #[tokio::test]
    async fn seed_lifecycle_within_a_transaction() {
        let store = InMemoryStore::new();

        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.seed(PidKind::Doi).await.unwrap(), None);
        tx.init_seed(PidKind::Doi, 42).await.unwrap();
        assert_eq!(tx.seed(PidKind::Doi).await.unwrap(), Some(42));
        tx.set_seed(PidKind::Doi, 43).await.unwrap();
        assert_eq!(tx.seed(PidKind::Doi).await.unwrap(), Some(43));
        tx.commit().await.unwrap();

        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.seed(PidKind::Doi).await.unwrap(), Some(43));
    }

    #[tokio::test]
    async fn init_seed_conflicts_on_second_insert() {
        let store = InMemoryStore::new();

        let mut tx = store.begin().await.unwrap();
        tx.init_seed(PidKind::Urn, 1).await.unwrap();
        let err = tx.init_seed(PidKind::Urn, 2).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn set_seed_requires_an_existing_row() {
        let store = InMemoryStore::new();

        let mut tx = store.begin().await.unwrap();
        let err = tx.set_seed(PidKind::Doi, 7).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
    }

    #[tokio::test]
    async fn dropping_a_transaction_rolls_back() {
        let store = InMemoryStore::new();

        {
            let mut tx = store.begin().await.unwrap();
            tx.init_seed(PidKind::Doi, 42).await.unwrap();
            tx.add_pid(PidKind::Doi, &pid("10.5072/dans-x6f-kf66"), ts(1000))
                .await
                .unwrap();
            // no commit
        }

        assert!(!store
            .has_pid(PidKind::Doi, &pid("10.5072/dans-x6f-kf66"))
            .await
            .unwrap());
        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.seed(PidKind::Doi).await.unwrap(), None);
    }

    #[tokio::test]
    async fn committed_pids_are_visible_with_their_timestamp() {
        let store = InMemoryStore::new();
        let id = pid("10.5072/dans-x6f-kf66");

        let mut tx = store.begin().await.unwrap();
        tx.init_seed(PidKind::Doi, 42).await.unwrap();
        tx.add_pid(PidKind::Doi, &id, ts(1000)).await.unwrap();
        tx.commit().await.unwrap();

        assert!(store.has_pid(PidKind::Doi, &id).await.unwrap());
        let mut tx = store.begin().await.unwrap();
        assert_eq!(
            tx.minted_at(PidKind::Doi, &id).await.unwrap(),
            Some(ts(1000))
        );
    }

    #[tokio::test]
    async fn add_pid_conflicts_on_duplicate() {
        let store = InMemoryStore::new();
        let id = pid("10.5072/dans-x6f-kf66");

        let mut tx = store.begin().await.unwrap();
        tx.add_pid(PidKind::Doi, &id, ts(1000)).await.unwrap();
        let err = tx.add_pid(PidKind::Doi, &id, ts(2000)).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn kinds_do_not_share_identifiers() {
        let store = InMemoryStore::new();
        let id = pid("shared-value");

        let mut tx = store.begin().await.unwrap();
        tx.add_pid(PidKind::Doi, &id, ts(1000)).await.unwrap();
        tx.add_pid(PidKind::Urn, &id, ts(1000)).await.unwrap();
        tx.commit().await.unwrap();

        assert!(store.has_pid(PidKind::Doi, &id).await.unwrap());
        assert!(store.has_pid(PidKind::Urn, &id).await.unwrap());
    }
}
