use async_trait::async_trait;
use pidforge_core::clock::{Clock, SystemClock};
use pidforge_core::store::{Store, StoreTx};
use pidforge_core::{MintError, Pid, PidKind, Result};
use pidforge_encoder::Encoder;
use std::sync::Arc;
use tracing::{debug, trace};

/// Public contract of the minting engine.
#[async_trait]
pub trait Minter: Send + Sync + 'static {
    /// Installs the starting seed for a kind. Fails with
    /// [`MintError::AlreadyInitialized`] if the kind already has one,
    /// leaving state unchanged.
    async fn initialize(&self, kind: PidKind, seed: u64) -> Result<()>;

    /// Mints the next identifier of a kind.
    async fn generate(&self, kind: PidKind) -> Result<Pid>;

    /// Checks whether an identifier was ever minted for a kind.
    async fn exists(&self, kind: PidKind, pid: &Pid) -> Result<bool>;
}

/// The minting engine: one [`Store`], one [`Encoder`], one [`Clock`].
///
/// Every operation runs inside a single store transaction. The seed-row
/// lock taken there is the only serialization point: under N concurrent
/// `generate` calls the backend orders the transactions, and the minted
/// identifiers are exactly the first N steps of the advance sequence in
/// that order — no gaps, no repeats. The engine never retries; a backend
/// abort surfaces as [`MintError::Storage`].
#[derive(Debug, Clone)]
pub struct PidMinter<S, C = SystemClock> {
    store: Arc<S>,
    encoder: Encoder,
    clock: Arc<C>,
}

impl<S: Store> PidMinter<S> {
    /// Creates a minter stamping mint times from the system clock.
    pub fn new(store: S, encoder: Encoder) -> Self {
        Self::with_clock(store, encoder, SystemClock)
    }
}

impl<S: Store, C: Clock> PidMinter<S, C> {
    /// Creates a minter with an explicit clock, so tests can pin the
    /// timestamps recorded for minted identifiers.
    pub fn with_clock(store: S, encoder: Encoder, clock: C) -> Self {
        Self {
            store: Arc::new(store),
            encoder,
            clock: Arc::new(clock),
        }
    }
}

#[async_trait]
impl<S: Store, C: Clock + 'static> Minter for PidMinter<S, C> {
    async fn initialize(&self, kind: PidKind, seed: u64) -> Result<()> {
        let mut tx = self.store.begin().await?;

        if let Some(existing) = tx.seed(kind).await? {
            return Err(MintError::AlreadyInitialized { kind, existing });
        }

        tx.init_seed(kind, seed).await?;
        tx.commit().await?;

        debug!(kind = %kind, seed, "seed initialized");
        Ok(())
    }

    async fn generate(&self, kind: PidKind) -> Result<Pid> {
        let mut tx = self.store.begin().await?;

        let Some(seed) = tx.seed(kind).await? else {
            return Err(MintError::NotInitialized(kind));
        };

        let pid = self.encoder.encode(kind, seed);
        let next_seed = self.encoder.advance(kind, seed);
        trace!(kind = %kind, seed, next_seed, pid = %pid, "computed candidate identifier");

        // Returning here drops the transaction, which rolls back: a
        // duplicate hit must not consume the seed.
        if let Some(created) = tx.minted_at(kind, &pid).await? {
            return Err(MintError::DuplicatePid {
                kind,
                used_seed: seed,
                next_seed,
                pid,
                created,
            });
        }

        tx.add_pid(kind, &pid, self.clock.now()).await?;
        tx.set_seed(kind, next_seed).await?;
        tx.commit().await?;

        debug!(kind = %kind, pid = %pid, "minted identifier");
        Ok(pid)
    }

    async fn exists(&self, kind: PidKind, pid: &Pid) -> Result<bool> {
        Ok(self.store.has_pid(kind, pid).await?)
    }
}
