use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use mergington_activities::database;
use mergington_activities::services::activity_signup_service::SignupPolicy;
use mergington_activities::web::{self, AppState};

async fn app_with(policy: SignupPolicy) -> Router {
    let pool = database::connect_in_memory().await.unwrap();
    web::router(AppState::new(pool, policy), "static")
}

async fn app() -> Router {
    app_with(SignupPolicy::default()).await
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (status, body) = send(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    body[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn get_activities_returns_a_non_empty_mapping() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let activities = body.as_object().unwrap();
    assert!(!activities.is_empty());
    assert!(activities.contains_key("Chess Club"));
    assert!(activities.contains_key("Programming Class"));
}

#[tokio::test]
async fn activities_are_listed_in_seed_order() {
    let app = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();

    let chess = raw.find("\"Chess Club\"").unwrap();
    let programming = raw.find("\"Programming Class\"").unwrap();
    let gym = raw.find("\"Gym Class\"").unwrap();
    assert!(chess < programming && programming < gym);
}

#[tokio::test]
async fn every_activity_has_the_required_fields() {
    let app = app().await;
    let (_, body) = send(&app, Method::GET, "/activities").await;

    for (name, activity) in body.as_object().unwrap() {
        assert!(activity["description"].is_string(), "{}", name);
        assert!(activity["schedule"].is_string(), "{}", name);
        assert!(activity["max_participants"].is_u64(), "{}", name);
        assert!(activity["participants"].is_array(), "{}", name);
    }
}

#[tokio::test]
async fn signup_succeeds_and_adds_exactly_one_participant() {
    let app = app().await;
    let email = "testuser123@mergington.edu";
    let before = participants(&app, "Basketball").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/activities/Basketball/signup?email={}", email),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Signed up"));

    let after = participants(&app, "Basketball").await;
    assert_eq!(after.len(), before.len() + 1);
    assert!(after.iter().any(|e| e == email));
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = app().await;
    let uri = "/activities/Chess%20Club/signup?email=duplicate@mergington.edu";

    let (status, _) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already signed up"));
}

#[tokio::test]
async fn signup_for_unknown_activity_is_not_found() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Nonexistent%20Activity/signup?email=test@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("Activity not found"));
}

#[tokio::test]
async fn activity_names_are_case_sensitive() {
    let app = app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/activities/chess%20club/signup?email=test@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn signup_without_email_is_a_bad_request() {
    let app = app().await;
    let (status, _) = send(&app, Method::POST, "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unregister_after_signup_removes_the_participant() {
    let app = app().await;
    let email = "remove_test@mergington.edu";

    send(
        &app,
        Method::POST,
        &format!("/activities/Drama%20Club/signup?email={}", email),
    )
    .await;
    assert!(participants(&app, "Drama Club").await.iter().any(|e| e == email));

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/activities/Drama%20Club/unregister?email={}", email),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Unregistered"));
    assert!(!participants(&app, "Drama Club").await.iter().any(|e| e == email));
}

#[tokio::test]
async fn unregister_of_unknown_email_is_rejected() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Science%20Club/unregister?email=notregistered@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("not registered"));
}

#[tokio::test]
async fn unregister_from_unknown_activity_is_not_found() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Fake%20Activity/unregister?email=test@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("Activity not found"));
}

#[tokio::test]
async fn chess_club_signup_and_unregister_round_trip() {
    let app = app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=a@x.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(participants(&app, "Chess Club").await.contains(&"a@x.edu".to_string()));

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=a@x.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!participants(&app, "Chess Club").await.contains(&"a@x.edu".to_string()));
}

#[tokio::test]
async fn full_activity_rejects_signup_when_capacity_is_enforced() {
    let app = app_with(SignupPolicy {
        enforce_capacity: true,
    })
    .await;
    // Tennis Club seats 10 and starts with one participant.
    for i in 0..9 {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/activities/Tennis%20Club/signup?email=p{}@mergington.edu", i),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Tennis%20Club/signup?email=late@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
    assert_eq!(participants(&app, "Tennis Club").await.len(), 10);
}

#[tokio::test]
async fn default_app_accepts_signups_past_capacity() {
    let app = app().await;
    for i in 0..10 {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/activities/Tennis%20Club/signup?email=p{}@mergington.edu", i),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(participants(&app, "Tennis Club").await.len(), 11);
}

#[tokio::test]
async fn separate_apps_do_not_share_state() {
    let first = app().await;
    let second = app().await;

    send(
        &first,
        Method::POST,
        "/activities/Science%20Club/signup?email=iso@mergington.edu",
    )
    .await;

    assert_eq!(participants(&first, "Science Club").await.len(), 1);
    assert!(participants(&second, "Science Club").await.is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn index_page_lists_activities_and_disables_caching() {
    let app = app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "no-store");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Chess Club"));
    assert!(html.contains("michael@mergington.edu"));
}
