use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    exists_pid_handler, health_handler, initialize_seed_handler, mint_pid_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/v1",
                Router::new()
                    .route("/seeds/:kind", put(initialize_seed_handler))
                    .route("/pids/:kind", post(mint_pid_handler))
                    .route("/pids/:kind/:pid", get(exists_pid_handler)),
            )
            .with_state(state)
    }
}
