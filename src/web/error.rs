use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::ActivityError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetailBody {
    pub detail: String,
}

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp
            | ActivityError::NotRegistered
            | ActivityError::ActivityFull => StatusCode::BAD_REQUEST,
            ActivityError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ActivityError::Database(e) => {
                error!("Activity store failure: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(DetailBody { detail })).into_response()
    }
}

/// Logs a rejected roster change and hands the error back for the response.
pub fn log_rejection(action: &str, activity_name: &str, e: ActivityError) -> ActivityError {
    if e.is_client_error() {
        warn!("{} for {:?} rejected: {}", action, activity_name, e);
    }
    e
}
