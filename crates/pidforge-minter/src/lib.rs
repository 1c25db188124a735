//! The PID minting engine.
//!
//! Orchestrates one mint: read the kind's seed, render the identifier,
//! check it was never issued, advance the seed, record the identifier —
//! all inside a single store transaction. Core types are re-exported from
//! `pidforge_core`.

pub mod minter;

pub use minter::{Minter, PidMinter};
pub use pidforge_core::{Clock, MintError, Pid, PidKind, Result, StoreError, SystemClock};
pub use pidforge_encoder::{Encoder, EncoderSettings};
pub use pidforge_storage::InMemoryStore;
