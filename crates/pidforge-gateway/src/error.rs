use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jiff::tz::TimeZone;
use pidforge_minter::MintError;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, AppError>;

pub enum AppError {
    /// The path's kind segment named no known identifier kind.
    UnknownKind(String),
    /// Engine failure, paired with the zone used to render any timestamp
    /// in the response body.
    Mint {
        error: MintError,
        timezone: TimeZone,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownKind(kind) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: format!("unknown pid kind: {kind}"),
                    created: None,
                }),
            )
                .into_response(),
            AppError::Mint { error, timezone } => {
                let status = match &error {
                    MintError::NotInitialized(_)
                    | MintError::AlreadyInitialized { .. }
                    | MintError::DuplicatePid { .. } => StatusCode::CONFLICT,
                    MintError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
                };
                let created = match &error {
                    MintError::DuplicatePid { created, .. } => {
                        Some(created.to_zoned(timezone).to_string())
                    }
                    _ => None,
                };
                (
                    status,
                    Json(ErrorBody {
                        error: error.to_string(),
                        created,
                    }),
                )
                    .into_response()
            }
        }
    }
}
