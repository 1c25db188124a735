pub mod health;
pub mod pid;

pub use health::health_handler;
pub use pid::{exists_pid_handler, initialize_seed_handler, mint_pid_handler};
