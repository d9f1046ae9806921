//! HTTP error type: maps domain errors to status codes and JSON bodies.

use crate::models::{DrawId, RosterError, TournamentError};
use crate::state::LockError;
use crate::store::StoreError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// Wrong admin password.
    Unauthorized,
    /// Admin-only route called without an admin session.
    Forbidden,
    /// Cup or league could not be simulated.
    Tournament(TournamentError),
    /// An explicitly requested draw does not exist (or was evicted).
    DrawNotFound(DrawId),
    /// Replacement rosters failed validation.
    InvalidTeams(RosterError),
    ReadTeams(StoreError),
    SaveTeams(StoreError),
    Session(String),
    Lock(LockError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Invalid password"),
            ApiError::Forbidden => write!(f, "Admin only"),
            ApiError::Tournament(e) => write!(f, "{}", e),
            ApiError::DrawNotFound(id) => write!(f, "No draw with id {}", id),
            ApiError::InvalidTeams(e) => write!(f, "{}", e),
            ApiError::ReadTeams(_) => write!(f, "Failed to read teams"),
            ApiError::SaveTeams(_) => write!(f, "Failed to save teams"),
            ApiError::Session(_) => write!(f, "Session error"),
            ApiError::Lock(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TournamentError> for ApiError {
    fn from(e: TournamentError) -> Self {
        ApiError::Tournament(e)
    }
}

impl From<RosterError> for ApiError {
    fn from(e: RosterError) -> Self {
        ApiError::InvalidTeams(e)
    }
}

impl From<LockError> for ApiError {
    fn from(e: LockError) -> Self {
        ApiError::Lock(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Tournament(_) | ApiError::InvalidTeams(_) => StatusCode::BAD_REQUEST,
            ApiError::DrawNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ReadTeams(_)
            | ApiError::SaveTeams(_)
            | ApiError::Session(_)
            | ApiError::Lock(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage details stay in the log, the client gets the generic message.
        match self {
            ApiError::ReadTeams(e) | ApiError::SaveTeams(e) => log::error!("{}: {}", self, e),
            ApiError::Session(detail) => log::error!("Session error: {}", detail),
            ApiError::Lock(_) => log::error!("Draw registry lock poisoned"),
            _ => {}
        }

        let body = match self {
            ApiError::Unauthorized => json!({ "ok": false, "message": self.to_string() }),
            ApiError::Forbidden => json!({ "message": self.to_string() }),
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
