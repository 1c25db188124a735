use crate::error::AppError;
use jiff::tz::TimeZone;
use pidforge_minter::{MintError, Minter};
use std::sync::Arc;
use typed_builder::TypedBuilder;

#[derive(Clone, TypedBuilder)]
pub struct AppState {
    /// The minting engine behind the HTTP surface.
    minter: Arc<dyn Minter>,
    /// Zone used when rendering mint timestamps in response bodies.
    timezone: TimeZone,
}

impl AppState {
    pub fn minter(&self) -> &Arc<dyn Minter> {
        &self.minter
    }

    /// Pairs an engine error with the configured zone for rendering.
    pub fn mint_error(&self, error: MintError) -> AppError {
        AppError::Mint {
            error,
            timezone: self.timezone.clone(),
        }
    }
}
