use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use dropship_api::auth;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

const SECRET: &str = "s3cret-token";

fn request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-internal-token", token);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A router whose only handler records that it ran.
fn probe(secret: &str) -> (Router, Arc<AtomicBool>) {
    let hit = Arc::new(AtomicBool::new(false));
    let flag = hit.clone();
    let router = Router::new().route(
        "/probe",
        get(move || {
            let flag = flag.clone();
            async move {
                flag.store(true, Ordering::SeqCst);
                "reached"
            }
        }),
    );
    (auth::gate(router, secret), hit)
}

#[tokio::test]
async fn health_with_valid_token_is_ok() {
    let response = marketing_service::router(SECRET)
        .oneshot(request("/api/health", Some(SECRET)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let response = marketing_service::router(SECRET)
        .oneshot(request("/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "unauthorized");
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    for token in ["wrong", "s3cret-toke", "s3cret-token ", "S3CRET-TOKEN", ""] {
        let response = marketing_service::router(SECRET)
            .oneshot(request("/api/health", Some(token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "token {token:?}");
    }
}

#[tokio::test]
async fn campaigns_are_not_implemented() {
    let response = marketing_service::router(SECRET)
        .oneshot(request("/api/marketing/google/campaigns", Some(SECRET)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_string(response).await, "not implemented");
}

#[tokio::test]
async fn campaigns_need_the_token_too() {
    let response = marketing_service::router(SECRET)
        .oneshot(request("/api/marketing/google/campaigns", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn gate_covers_unknown_paths_and_wrong_methods() {
    let response = marketing_service::router(SECRET)
        .oneshot(request("/nope", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let post = Request::builder()
        .method("POST")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = marketing_service::router(SECRET).oneshot(post).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rejected_requests_never_reach_the_handler() {
    let (app, hit) = probe(SECRET);

    let response = app.clone().oneshot(request("/probe", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let response = app.oneshot(request("/probe", Some("nope"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert!(!hit.load(Ordering::SeqCst));
}

#[tokio::test]
async fn accepted_requests_reach_the_handler() {
    let (app, hit) = probe(SECRET);

    let response = app.oneshot(request("/probe", Some(SECRET))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "reached");
    assert!(hit.load(Ordering::SeqCst));
}

#[tokio::test]
async fn empty_secret_admits_requests_without_a_token() {
    let (app, hit) = probe("");

    let response = app.clone().oneshot(request("/probe", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(hit.load(Ordering::SeqCst));

    let response = app.oneshot(request("/probe", Some("anything"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
