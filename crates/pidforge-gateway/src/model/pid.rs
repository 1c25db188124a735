use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeSeedRequest {
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub kind: String,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PidResponse {
    pub kind: String,
    pub pid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub kind: String,
    pub pid: String,
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
