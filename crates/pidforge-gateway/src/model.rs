pub mod pid;

pub use pid::{ExistsResponse, HealthResponse, InitializeSeedRequest, PidResponse, SeedResponse};
