use crate::kind::PidKind;
use crate::pid::Pid;
use jiff::Timestamp;
use thiserror::Error;

/// Type alias for the result type used by the minting engine.
pub type Result<T> = std::result::Result<T, MintError>;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for StoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Other(err)
    }
}

/// Everything a mint, an initialize, or an existence check can fail with.
///
/// No variant is ever swallowed or retried inside the engine; serialization
/// conflicts from the backend arrive as [`MintError::Storage`] and retrying
/// is the caller's decision.
#[derive(Debug, Error)]
pub enum MintError {
    /// A mint was attempted before the kind's seed was installed.
    #[error("no seed initialized for kind {0}")]
    NotInitialized(PidKind),
    /// A second initialize for a kind; carries the persisted seed.
    #[error("kind {kind} already initialized with seed {existing}")]
    AlreadyInitialized { kind: PidKind, existing: u64 },
    /// The computed identifier is already present. The seed was not
    /// advanced; `created` is the original insertion's timestamp.
    #[error("{kind} identifier {pid} was already minted at {created}")]
    DuplicatePid {
        kind: PidKind,
        used_seed: u64,
        next_seed: u64,
        pid: Pid,
        created: Timestamp,
    },
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
