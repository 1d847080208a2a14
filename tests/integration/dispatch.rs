//! Outcome mapping for every route and payload class.
//!
//! Each test drives a complete request through `Router::handle_request` and
//! checks the status code, the body, and the response envelope.

use crate::common::{self, providers::FailingDirectory, providers::RejectingDirectory};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use directory_gateway::{GatewayConfig, HttpRequest, NEW_USER_STATUS, Router};
use serde_json::json;

#[tokio::test]
async fn test_created_user_worked_example() {
    let (router, directory) = common::test_router();

    let request = common::post_users(r#"{"username":"alice","email":"a@example.com"}"#);
    let response = router.handle_request(&request).await;

    common::assert_json_envelope(&response);
    assert_eq!(response.status_code, 201);
    assert_eq!(
        response.body_json().unwrap(),
        json!({
            "message": "User created successfully",
            "username": "alice",
            "status": "FORCE_CHANGE_PASSWORD",
        })
    );

    let record = directory
        .get_user(common::TEST_POOL_ID, "alice")
        .await
        .expect("alice was provisioned");
    assert_eq!(record.status, NEW_USER_STATUS);
    assert!(record.enabled);
}

#[tokio::test]
async fn test_email_is_attached_pre_verified() {
    let (router, directory) = common::test_router();

    let request = common::post_users(
        r#"{"username":"bob","email":"b@example.com","phoneNumber":"+15550002222"}"#,
    );
    let response = router.handle_request(&request).await;
    assert_eq!(response.status_code, 201);

    let record = directory
        .get_user(common::TEST_POOL_ID, "bob")
        .await
        .unwrap();
    let attribute = |name: &str| {
        record
            .attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.clone())
    };
    assert_eq!(attribute("email").as_deref(), Some("b@example.com"));
    assert_eq!(attribute("email_verified").as_deref(), Some("true"));
    assert_eq!(attribute("phone_number").as_deref(), Some("+15550002222"));
}

#[tokio::test]
async fn test_omitted_password_is_generated() {
    let (router, directory) = common::test_router();

    router
        .handle_request(&common::post_users(&common::username_payload("carol")))
        .await;
    router
        .handle_request(&common::post_users(&common::username_payload("dave")))
        .await;

    let carol = directory
        .get_user(common::TEST_POOL_ID, "carol")
        .await
        .unwrap();
    let dave = directory
        .get_user(common::TEST_POOL_ID, "dave")
        .await
        .unwrap();
    assert!(!carol.temporary_password.is_empty());
    assert_ne!(carol.temporary_password, dave.temporary_password);
}

#[tokio::test]
async fn test_supplied_password_is_honored() {
    let (router, directory) = common::test_router();

    let request =
        common::post_users(r#"{"username":"erin","temporaryPassword":"Chosen1!pw"}"#);
    assert_eq!(router.handle_request(&request).await.status_code, 201);

    let record = directory
        .get_user(common::TEST_POOL_ID, "erin")
        .await
        .unwrap();
    assert_eq!(record.temporary_password, "Chosen1!pw");
}

#[tokio::test]
async fn test_unmatched_routes_are_not_found() {
    let (router, _directory) = common::test_router();

    for (method, path) in [
        ("GET", "/users"),
        ("PUT", "/users"),
        ("DELETE", "/users"),
        ("POST", "/user"),
        ("POST", "/users/alice"),
        ("POST", "/"),
        ("GET", "/health"),
    ] {
        let response = router
            .handle_request(&HttpRequest::new(method, path))
            .await;
        common::assert_json_envelope(&response);
        assert_eq!(response.status_code, 404, "{method} {path}");
        assert_eq!(response.body_json().unwrap()["error"], "Not Found");
    }
}

#[tokio::test]
async fn test_missing_username_is_a_validation_error() {
    let (router, directory) = common::test_router();

    for body in [r#"{}"#, r#"{"username":""}"#, r#"{"email":"x@y.com"}"#] {
        let response = router.handle_request(&common::post_users(body)).await;
        common::assert_json_envelope(&response);
        assert_eq!(response.status_code, 400, "body: {body}");
        assert_eq!(
            response.body_json().unwrap()["error"],
            "Username is required"
        );
    }
    assert_eq!(directory.user_count(common::TEST_POOL_ID).await, 0);
}

#[tokio::test]
async fn test_absent_body_is_a_validation_error() {
    let (router, _directory) = common::test_router();

    let response = router
        .handle_request(&HttpRequest::new("POST", "/users"))
        .await;
    common::assert_json_envelope(&response);
    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body_json().unwrap()["error"],
        "Request body is required"
    );
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let (router, _directory) = common::test_router();

    let response = router
        .handle_request(&common::post_users("{username: alice"))
        .await;
    common::assert_json_envelope(&response);
    assert_eq!(response.status_code, 400);
    let error = response.body_json().unwrap()["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.starts_with("Malformed request body"), "got: {error}");
}

#[tokio::test]
async fn test_duplicate_user_is_rejected_verbatim() {
    let (router, directory) = common::test_router();
    let request = common::post_users(&common::username_payload("frank"));

    assert_eq!(router.handle_request(&request).await.status_code, 201);

    let response = router.handle_request(&request).await;
    common::assert_json_envelope(&response);
    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body_json().unwrap()["error"],
        "User already exists"
    );
    assert_eq!(directory.user_count(common::TEST_POOL_ID).await, 1);
}

#[tokio::test]
async fn test_policy_rejection_is_surfaced_verbatim() {
    common::init_logging();
    let router = Router::new(
        GatewayConfig::new(common::TEST_POOL_ID),
        RejectingDirectory::new("Password did not conform with policy: Password not long enough"),
    )
    .unwrap();

    let response = router
        .handle_request(&common::post_users(&common::username_payload("grace")))
        .await;
    common::assert_json_envelope(&response);
    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body_json().unwrap()["error"],
        "Password did not conform with policy: Password not long enough"
    );
}

#[tokio::test]
async fn test_unexpected_fault_detail_never_leaks() {
    common::init_logging();
    let router = Router::new(
        GatewayConfig::new(common::TEST_POOL_ID),
        FailingDirectory::new("connection reset by peer at 10.0.3.7:443"),
    )
    .unwrap();

    let response = router
        .handle_request(&common::post_users(&common::username_payload("henry")))
        .await;
    common::assert_json_envelope(&response);
    assert_eq!(response.status_code, 500);
    let body = response.body_json().unwrap();
    assert_eq!(body["error"], "Internal server error");
    assert!(!response.body.contains("10.0.3.7"));
}

#[tokio::test]
async fn test_base64_encoded_body_is_transparent() {
    let (router, directory) = common::test_router();

    let request = HttpRequest::new("POST", "/users")
        .with_base64_body(BASE64.encode(r#"{"username":"iris"}"#));
    let response = router.handle_request(&request).await;

    assert_eq!(response.status_code, 201);
    assert!(
        directory
            .get_user(common::TEST_POOL_ID, "iris")
            .await
            .is_some()
    );
}

#[tokio::test]
async fn test_undecodable_body_hits_the_outer_guard() {
    let (router, directory) = common::test_router();

    let request = HttpRequest::new("POST", "/users").with_base64_body("%%not-base64%%");
    let response = router.handle_request(&request).await;

    common::assert_json_envelope(&response);
    assert_eq!(response.status_code, 500);
    let error = response.body_json().unwrap()["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.contains("base64"), "got: {error}");
    assert_eq!(directory.user_count(common::TEST_POOL_ID).await, 0);
}
