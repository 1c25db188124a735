use crate::error::StoreError;
use crate::kind::PidKind;
use crate::pid::Pid;
use async_trait::async_trait;
use jiff::Timestamp;

/// Type alias for results at the persistence boundary.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Transactional persistence of per-kind seeds and minted identifiers.
///
/// Per-kind mutual exclusion over a mint comes from the backend — a row
/// lock taken by [`StoreTx::seed`], or an equivalent critical section —
/// never from process-local locks, so multiple service instances can share
/// one database without further coordination.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    type Tx: StoreTx;

    /// Opens a transaction. Dropping the value without commit rolls back.
    async fn begin(&self) -> StoreResult<Self::Tx>;

    /// Checks whether an identifier was ever minted for the kind.
    async fn has_pid(&self, kind: PidKind, pid: &Pid) -> StoreResult<bool>;
}

/// One open transaction against a [`Store`].
#[async_trait]
pub trait StoreTx: Send {
    /// Reads the kind's current seed, taking the backend's write lock on
    /// the row. Returns `None` while the kind is uninitialized.
    async fn seed(&mut self, kind: PidKind) -> StoreResult<Option<u64>>;

    /// Installs the first seed for a kind. Fails with
    /// [`StoreError::Conflict`] if a row for the kind already exists.
    async fn init_seed(&mut self, kind: PidKind, value: u64) -> StoreResult<()>;

    /// Replaces the kind's seed. The row must already exist.
    async fn set_seed(&mut self, kind: PidKind, value: u64) -> StoreResult<()>;

    /// Returns when the identifier was minted, or `None` if it never was.
    async fn minted_at(&mut self, kind: PidKind, pid: &Pid) -> StoreResult<Option<Timestamp>>;

    /// Records a minted identifier. Fails with [`StoreError::Conflict`] if
    /// the (kind, identifier) pair is already present.
    async fn add_pid(&mut self, kind: PidKind, pid: &Pid, created: Timestamp) -> StoreResult<()>;

    /// Makes the transaction's writes visible.
    async fn commit(self) -> StoreResult<()>;
}
