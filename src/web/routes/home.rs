use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::warn;

use crate::services::activities_service::{self, ActivityCardView};
use crate::web::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub activities: Vec<ActivityCardView>,
    pub enforce_capacity: bool,
}

pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let activities = match activities_service::load_activity_cards(&state.pool).await {
        Ok(v) => v,
        Err(e) => {
            warn!("Activity cards load failed: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let template = IndexTemplate {
        activities,
        enforce_capacity: state.signup_policy.enforce_capacity,
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!("Index template render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
