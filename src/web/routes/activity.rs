use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ActivityError;
use crate::services::activity_signup_service;
use crate::web::error::{log_rejection, MessageBody};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageBody>, ActivityError> {
    let receipt = activity_signup_service::signup(
        &state.pool,
        &activity_name,
        &query.email,
        state.signup_policy,
    )
    .await
    .map_err(|e| log_rejection("Signup", &activity_name, e))?;

    Ok(Json(MessageBody {
        message: receipt.message(),
    }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageBody>, ActivityError> {
    let receipt = activity_signup_service::unregister(&state.pool, &activity_name, &query.email)
        .await
        .map_err(|e| log_rejection("Unregister", &activity_name, e))?;

    Ok(Json(MessageBody {
        message: receipt.message(),
    }))
}
