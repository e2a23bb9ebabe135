//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Sessions are signed with AUTH_JWT_SECRET (a test default is used when
//! unset), so the identity provider itself is never contacted.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, complete_form, final_step, ErrorResponse,
    RouteResponse, SubmissionResponse, TestServer, TestSession,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Callback Tests
// ============================================================================

#[tokio::test]
async fn test_callback_without_session_reports_error() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/auth/callback", &json!({}))
        .await
        .unwrap();
    let route: RouteResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(route.route, "error");
    assert_eq!(route.path, "/login");
    assert!(route.message.is_some());
}

#[tokio::test]
async fn test_callback_routes_new_user_to_onboarding() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = TestSession::unique(&server.config).unwrap();

    let response = server
        .post_empty_auth("/api/v1/auth/callback", &session.access_token)
        .await
        .unwrap();
    let route: RouteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(route.route, "onboarding");
    assert_eq!(route.path, "/signup");
}

// ============================================================================
// Onboarding Tests
// ============================================================================

#[tokio::test]
async fn test_onboarding_prefills_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = TestSession::unique(&server.config).unwrap();

    let response = server
        .get_auth("/api/v1/onboarding", &session.access_token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["mode"], "authenticated");
    assert_eq!(body["form"]["firstName"], session.first_name());
    assert!(body["read_only_fields"]
        .as_array()
        .unwrap()
        .contains(&json!("email")));
}

#[tokio::test]
async fn test_submit_missing_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut form = complete_form("Ada");
    form["timezone"] = json!("");
    form["calendarUrl"] = json!("");

    let response = server
        .post("/api/v1/onboarding/submit", &final_step(form))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert_eq!(error.error.code, "MISSING_REQUIRED_FIELDS");
    assert_eq!(
        error.error.details.unwrap()["missing_fields"],
        json!(["timezone", "calendarUrl"])
    );
}

#[tokio::test]
async fn test_submit_before_final_step_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/onboarding/submit",
            &json!({ "step": 2, "form": complete_form("Ada") }),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "SUBMIT_NOT_ALLOWED");
}

#[tokio::test]
async fn test_authenticated_onboarding_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = TestSession::unique(&server.config).unwrap();

    // Submit the wizard
    let response = server
        .post_auth(
            "/api/v1/onboarding/submit",
            &session.access_token,
            &final_step(complete_form(session.first_name())),
        )
        .await
        .unwrap();
    let submission: SubmissionResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(submission.step, 5);
    assert_eq!(submission.profile.id, session.identity.id.to_string());
    assert_eq!(submission.profile.email, session.identity.email);
    assert!(submission.profile.onboarding_complete);
    assert!(submission.profile.member_since.is_some());
    assert_eq!(submission.redirect.path, "/dashboard");

    // The callback now sends the user to the directory
    let response = server
        .post_empty_auth("/api/v1/auth/callback", &session.access_token)
        .await
        .unwrap();
    let route: RouteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(route.route, "directory");

    // The directory loads and never lists the viewer
    let response = server
        .get_auth("/api/v1/directory", &session.access_token)
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["status"], "loaded");
    let own_id = session.identity.id.to_string();
    assert!(page["profiles"]
        .as_array()
        .unwrap()
        .iter()
        .all(|card| card["id"] != own_id.as_str()));
}

// ============================================================================
// Directory Tests
// ============================================================================

#[tokio::test]
async fn test_directory_filters_by_founder_type() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let viewer = TestSession::unique(&server.config).unwrap();
    let other = TestSession::unique(&server.config).unwrap();

    for session in [&viewer, &other] {
        let response = server
            .post_auth(
                "/api/v1/onboarding/submit",
                &session.access_token,
                &final_step(complete_form(session.first_name())),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let other_id = other.identity.id.to_string();

    let response = server
        .get_auth(
            "/api/v1/directory?founder_type=hacker",
            &viewer.access_token,
        )
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page["profiles"]
        .as_array()
        .unwrap()
        .iter()
        .any(|card| card["id"] == other_id.as_str()));

    let response = server
        .get_auth(
            "/api/v1/directory?founder_type=hipster",
            &viewer.access_token,
        )
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page["profiles"]
        .as_array()
        .unwrap()
        .iter()
        .all(|card| card["id"] != other_id.as_str()));
}

#[tokio::test]
async fn test_directory_redirects_without_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/directory").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "redirect");
    assert_eq!(body["redirect"]["path"], "/login");
}

// ============================================================================
// Profile Editor Tests
// ============================================================================

#[tokio::test]
async fn test_profile_update() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = TestSession::unique(&server.config).unwrap();

    let response = server
        .get_auth("/api/v1/profiles/@me", &session.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/onboarding/submit",
            &session.access_token,
            &final_step(complete_form(session.first_name())),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            "/api/v1/profiles/@me",
            &session.access_token,
            &json!({ "location": "Remote", "bio": "Now full-time" }),
        )
        .await
        .unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["location"], "Remote");
    assert_eq!(profile["bio"], "Now full-time");
    assert_eq!(profile["timezone"], "cet");

    let response = server
        .get_auth("/api/v1/profiles/@me", &session.access_token)
        .await
        .unwrap();
    let form: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(form["form"]["location"], "Remote");
    assert_eq!(form["onboarding_complete"], true);
}

#[tokio::test]
async fn test_profile_requires_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/profiles/@me").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}
