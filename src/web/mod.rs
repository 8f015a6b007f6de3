use std::path::Path;

use axum::{
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::activity_signup_service::SignupPolicy;

pub mod error;
pub mod routes;

use routes::{activities, activity, health, home};

/// Shared by every handler. Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub signup_policy: SignupPolicy,
}

impl AppState {
    pub fn new(pool: SqlitePool, signup_policy: SignupPolicy) -> Self {
        Self {
            pool,
            signup_policy,
        }
    }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let routes = Router::new()
        .route("/", get(home::index_handler))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        );

    with_common_layers(routes).with_state(state)
}

// Cache-Control sits outside CatchPanic so panic-generated 500s carry it too.
fn with_common_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}
