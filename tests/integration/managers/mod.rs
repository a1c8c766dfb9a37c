//! Manager endpoint integration tests
//!
//! - POST /manager - Signup
//! - POST /manager/login - Login
//! - GET /manager, GET /manager/{id}
//! - PUT /manager/{id}, DELETE /manager/{id} - own account only

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{assertions::assert_error, id_of, TestApp};

mod test_signup {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_user_name_conflicts() {
        let app = TestApp::new();
        app.signup("coach1", "pw").await;

        let (status, body) = app
            .post(
                "/manager",
                None,
                json!({
                    "userName": "coach1",
                    "password": "other",
                    "firstName": "C",
                    "lastName": "D",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_error(&body, "CONFLICT");

        let (_, managers) = app.get("/manager").await;
        assert_eq!(managers.as_array().unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_signups_create_one_manager() {
        let app = std::sync::Arc::new(TestApp::new());

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let app = std::sync::Arc::clone(&app);
                tokio::spawn(async move {
                    app.post(
                        "/manager",
                        None,
                        json!({
                            "userName": "coach1",
                            "password": format!("pw{}", i),
                            "firstName": "A",
                            "lastName": "B",
                        }),
                    )
                    .await
                    .0
                })
            })
            .collect();

        let mut statuses = Vec::new();
        for task in tasks {
            statuses.push(task.await.unwrap());
        }

        let created = statuses
            .iter()
            .filter(|status| **status == StatusCode::CREATED)
            .count();
        assert_eq!(created, 1);
        assert!(statuses
            .iter()
            .all(|status| *status == StatusCode::CREATED || *status == StatusCode::CONFLICT));

        let (_, managers) = app.get("/manager").await;
        assert_eq!(managers.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let app = TestApp::new();

        let (status, body) = app
            .post("/manager", None, json!({ "userName": "coach1" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "VALIDATION_ERROR");

        let (status, _) = app
            .post(
                "/manager",
                None,
                json!({
                    "userName": "",
                    "password": "pw",
                    "firstName": "A",
                    "lastName": "B",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let app = TestApp::new();
        let body = app.signup("coach1", "pw").await;
        let id: Uuid = id_of(&body).parse().unwrap();

        let stored = app.repos.managers.find_by_id(id).await.unwrap().unwrap();
        assert_ne!(stored.password_digest, "pw");
        assert!(stored.verify_password("pw"));
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    async fn test_unknown_user_matches_wrong_password() {
        let app = TestApp::new();
        app.signup("coach1", "pw").await;

        let (unknown_status, unknown_body) = app
            .post(
                "/manager/login",
                None,
                json!({ "userName": "nobody", "password": "pw" }),
            )
            .await;
        let (wrong_status, wrong_body) = app
            .post(
                "/manager/login",
                None,
                json!({ "userName": "coach1", "password": "nope" }),
            )
            .await;

        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_body, wrong_body);
    }

    #[tokio::test]
    async fn test_login_token_names_the_manager() {
        let app = TestApp::new();
        let (id, token) = app.manager_session("coach1").await;

        assert_eq!(app.tokens.validate(&token).unwrap(), id);
    }
}

mod test_get_manager {
    use super::*;

    #[tokio::test]
    async fn test_get_one_and_all() {
        let app = TestApp::new();
        let first = app.signup("coach1", "pw").await;
        app.signup("coach2", "pw").await;

        let (status, body) = app.get(&format!("/manager/{}", id_of(&first))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, first);

        let (status, body) = app.get("/manager").await;
        assert_eq!(status, StatusCode::OK);
        let managers = body.as_array().unwrap();
        assert_eq!(managers.len(), 2);
        assert!(managers.iter().all(|m| m.get("passwordDigest").is_none()));
    }

    #[tokio::test]
    async fn test_unknown_manager_is_not_found() {
        let app = TestApp::new();

        let (status, body) = app.get(&format!("/manager/{}", Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, "NOT_FOUND");

        let (status, _) = app.get("/manager/not-a-uuid").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_update_manager {
    use super::*;

    #[tokio::test]
    async fn test_update_own_account() {
        let app = TestApp::new();
        let (id, token) = app.manager_session("coach1").await;

        let (status, body) = app
            .put(
                &format!("/manager/{}", id),
                Some(&token),
                json!({
                    "userName": "coach1",
                    "firstName": "New",
                    "lastName": "Name",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["firstName"], "New");
        assert_eq!(body["id"], id.to_string());

        // Omitted password keeps the old one
        let (status, _) = app
            .post(
                "/manager/login",
                None,
                json!({ "userName": "coach1", "password": "pw" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_password() {
        let app = TestApp::new();
        let (id, token) = app.manager_session("coach1").await;

        let (status, _) = app
            .put(
                &format!("/manager/{}", id),
                Some(&token),
                json!({
                    "userName": "coach1",
                    "password": "fresh",
                    "firstName": "A",
                    "lastName": "B",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let (status, _) = app
            .post(
                "/manager/login",
                None,
                json!({ "userName": "coach1", "password": "pw" }),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app
            .post(
                "/manager/login",
                None,
                json!({ "userName": "coach1", "password": "fresh" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cannot_update_another_manager() {
        let app = TestApp::new();
        let (_, token) = app.manager_session("coach1").await;
        let other = app.signup("coach2", "pw").await;

        let (status, body) = app
            .put(
                &format!("/manager/{}", id_of(&other)),
                Some(&token),
                json!({
                    "userName": "hijacked",
                    "firstName": "X",
                    "lastName": "Y",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_error(&body, "FORBIDDEN");

        let (_, unchanged) = app.get(&format!("/manager/{}", id_of(&other))).await;
        assert_eq!(unchanged["userName"], "coach2");
    }

    #[tokio::test]
    async fn test_cannot_take_existing_user_name() {
        let app = TestApp::new();
        let (id, token) = app.manager_session("coach1").await;
        app.signup("coach2", "pw").await;

        let (status, _) = app
            .put(
                &format!("/manager/{}", id),
                Some(&token),
                json!({
                    "userName": "coach2",
                    "firstName": "A",
                    "lastName": "B",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_requires_names() {
        let app = TestApp::new();
        let (id, token) = app.manager_session("coach1").await;

        let (status, _) = app
            .put(
                &format!("/manager/{}", id),
                Some(&token),
                json!({ "userName": "coach1" }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

mod test_delete_manager {
    use super::*;

    #[tokio::test]
    async fn test_delete_own_account() {
        let app = TestApp::new();
        let (id, token) = app.manager_session("coach1").await;

        let (status, body) = app.delete(&format!("/manager/{}", id), Some(&token)).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, json!({ "message": "Success" }));

        let (status, _) = app.get(&format!("/manager/{}", id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Deleting again is a plain 404
        let (status, _) = app.delete(&format!("/manager/{}", id), Some(&token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cannot_delete_another_manager() {
        let app = TestApp::new();
        let (_, token) = app.manager_session("coach1").await;
        let other = app.signup("coach2", "pw").await;

        let (status, _) = app
            .delete(&format!("/manager/{}", id_of(&other)), Some(&token))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app.get(&format!("/manager/{}", id_of(&other))).await;
        assert_eq!(status, StatusCode::OK);
    }
}
