use axum::{extract::State, Json};

use crate::error::ActivityError;
use crate::services::activities_service::{self, ActivityDirectory};
use crate::web::AppState;

pub async fn activities_handler(
    State(state): State<AppState>,
) -> Result<Json<ActivityDirectory>, ActivityError> {
    let activities = activities_service::list_activities(&state.pool).await?;
    Ok(Json(activities))
}
