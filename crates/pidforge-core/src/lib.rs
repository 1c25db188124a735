//! Core types and traits for the pidforge minting service.
//!
//! This crate provides the shared vocabulary used by the encoder, storage,
//! and minter crates: identifier kinds, the printable identifier newtype,
//! the store contract, the clock, and the error taxonomy.

pub mod clock;
pub mod error;
pub mod kind;
pub mod pid;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{MintError, Result, StoreError};
pub use kind::PidKind;
pub use pid::Pid;
pub use store::{Store, StoreResult, StoreTx};
