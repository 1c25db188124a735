use crate::error::{AppError, Result};
use crate::model::{ExistsResponse, InitializeSeedRequest, PidResponse, SeedResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pidforge_minter::{Pid, PidKind};
use tracing::info;

fn parse_kind(kind: &str) -> Result<PidKind> {
    kind.parse()
        .map_err(|_| AppError::UnknownKind(kind.to_string()))
}

pub async fn initialize_seed_handler(
    Path(kind): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<InitializeSeedRequest>,
) -> Result<(StatusCode, Json<SeedResponse>)> {
    let kind = parse_kind(&kind)?;

    state
        .minter()
        .initialize(kind, request.seed)
        .await
        .map_err(|e| state.mint_error(e))?;

    info!(kind = %kind, seed = request.seed, "seed initialized via gateway");
    Ok((
        StatusCode::CREATED,
        Json(SeedResponse {
            kind: kind.to_string(),
            seed: request.seed,
        }),
    ))
}

pub async fn mint_pid_handler(
    Path(kind): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<PidResponse>)> {
    let kind = parse_kind(&kind)?;

    let pid = state
        .minter()
        .generate(kind)
        .await
        .map_err(|e| state.mint_error(e))?;

    Ok((
        StatusCode::CREATED,
        Json(PidResponse {
            kind: kind.to_string(),
            pid: pid.to_string(),
        }),
    ))
}

pub async fn exists_pid_handler(
    Path((kind, pid)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<ExistsResponse>> {
    let kind = parse_kind(&kind)?;
    let pid = Pid::new(pid);

    let exists = state
        .minter()
        .exists(kind, &pid)
        .await
        .map_err(|e| state.mint_error(e))?;

    Ok(Json(ExistsResponse {
        kind: kind.to_string(),
        pid: pid.to_string(),
        exists,
    }))
}
