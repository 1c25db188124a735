//! Store implementations for the pidforge minting service.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
pub use pidforge_core::store::{Store, StoreResult, StoreTx};
pub use pidforge_core::StoreError;
