//! Token enforcement on protected routes
//!
//! Every mutating player, team and sport route plus manager update/delete
//! requires `Authorization: Bearer <token>`; failures are 403.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use chrono::{Duration, Utc};
use serde_json::json;
use sports_manager_auth::{AuthConfig, TokenIssuer};
use uuid::Uuid;

use crate::common::{assertions::assert_error, TestApp};

fn protected_routes(id: Uuid) -> Vec<(Method, String)> {
    vec![
        (Method::POST, "/player".to_string()),
        (Method::PUT, format!("/player/{}", id)),
        (Method::DELETE, format!("/player/{}", id)),
        (Method::POST, "/team".to_string()),
        (Method::PUT, format!("/team/{}", id)),
        (Method::DELETE, format!("/team/{}", id)),
        (Method::POST, "/sport".to_string()),
        (Method::PUT, format!("/sport/{}", id)),
        (Method::DELETE, format!("/sport/{}", id)),
        (Method::PUT, format!("/manager/{}", id)),
        (Method::DELETE, format!("/manager/{}", id)),
    ]
}

#[tokio::test]
async fn test_missing_token_is_forbidden_everywhere() {
    let app = TestApp::new();

    for (method, uri) in protected_routes(Uuid::new_v4()) {
        let (status, body) = app
            .request(method.clone(), &uri, None, Some(json!({})))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
        assert_error(&body, "MISSING_AUTHORIZATION");
        assert_eq!(body["error"]["message"], "Access forbidden");
    }
}

#[tokio::test]
async fn test_wrong_scheme_is_forbidden() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/sport")
        .header(header::AUTHORIZATION, format!("Token {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "sportName": "Hockey" }).to_string()))
        .unwrap();

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "INVALID_AUTHORIZATION");
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/sport", Some("not.a.token"), json!({ "sportName": "Hockey" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_forbidden() {
    let app = TestApp::new();
    let foreign = TokenIssuer::new(AuthConfig::new("some-other-secret"))
        .issue(Uuid::new_v4())
        .unwrap();

    let (status, body) = app
        .post("/sport", Some(&foreign), json!({ "sportName": "Hockey" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let app = TestApp::new();
    let expired = app
        .tokens
        .issue_at(Uuid::new_v4(), Utc::now() - Duration::hours(2))
        .unwrap();

    let (status, body) = app
        .post("/sport", Some(&expired), json!({ "sportName": "Hockey" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "TOKEN_EXPIRED");

    // Nothing was written
    let (_, sports) = app.get("/sport").await;
    assert_eq!(sports, json!([]));
}

#[tokio::test]
async fn test_token_checked_before_body() {
    let app = TestApp::new();

    // Invalid body but no token: the token failure wins
    let (status, _) = app.post("/team", None, json!({ "bogus": true })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reads_are_public() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    for uri in [
        "/manager".to_string(),
        "/player".to_string(),
        "/team".to_string(),
        "/sport".to_string(),
        format!("/player/team/{}", id),
        format!("/team/sport/{}", id),
        format!("/team/manager/{}", id),
        "/admin/health-check".to_string(),
        "/health".to_string(),
    ] {
        let (status, _) = app.get(&uri).await;
        assert_eq!(status, StatusCode::OK, "GET {}", uri);
    }
}

#[tokio::test]
async fn test_any_valid_token_may_write_shared_resources() {
    let app = TestApp::new();
    // The token subject does not have to be a stored manager
    let token = app.token_for(Uuid::new_v4());

    let (status, _) = app
        .post("/sport", Some(&token), json!({ "sportName": "Hockey" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}
