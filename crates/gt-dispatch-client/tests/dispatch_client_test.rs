//! Contract tests for DispatchClient against the dispatch backend.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/api/v1/dispatch/` | `ping_*` |
//! | POST   | `/api/v1/dispatch/contact/` | `submit_contact_*` |
//! | POST   | `/api/v1/dispatch/claim/` | `submit_claim_*` |
//! | POST   | `/api/v1/dispatch/signup/` | `submit_signup_*` |

use std::time::Duration;

use gt_dispatch_client::{
    ClaimForm, ContactSubmissionRequest, DispatchApiConfig, DispatchApiError, DispatchClient,
    SignupForm,
};
use uuid::Uuid;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> DispatchClient {
    let config = DispatchApiConfig::new(&mock_server.uri(), 5).unwrap();
    DispatchClient::new(config).unwrap()
}

fn contact_request() -> ContactSubmissionRequest {
    ContactSubmissionRequest {
        first_name: "Dana".into(),
        last_name: "Reyes".into(),
        email: "dana@example.com".into(),
        phone: None,
        message: "Looking for a dispatcher for two reefers.".into(),
    }
}

// ── GET /api/v1/dispatch/ ────────────────────────────────────────────

#[tokio::test]
async fn ping_returns_backend_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/dispatch/"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "API is working!",
            "status": "success",
            "data": {"version": "1.0.0", "endpoint": "/api/v1/dispatch/"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let pong = client.ping().await.unwrap();
    assert_eq!(pong.message, "API is working!");
    assert_eq!(pong.status, "success");
    assert_eq!(pong.data.unwrap()["version"], "1.0.0");
}

#[tokio::test]
async fn ping_non_success_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/dispatch/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).ping().await.unwrap_err();
    match err {
        DispatchApiError::ApiError { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

// ── POST /api/v1/dispatch/contact/ ───────────────────────────────────

#[tokio::test]
async fn submit_contact_sends_snake_case_body_and_request_id() {
    let mock_server = MockServer::start().await;
    let request_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/contact/"))
        .and(header("x-request-id", request_id.to_string().as_str()))
        .and(body_json(serde_json::json!({
            "first_name": "Dana",
            "last_name": "Reyes",
            "email": "dana@example.com",
            "phone": null,
            "message": "Looking for a dispatcher for two reefers."
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "message": "Thank you for contacting us!",
            "data": {"id": 42, "email": "dana@example.com"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let accepted = client
        .submit_contact(&contact_request(), request_id)
        .await
        .unwrap();
    assert_eq!(
        accepted.message.as_deref(),
        Some("Thank you for contacting us!")
    );
    assert_eq!(accepted.data.unwrap()["id"], 42);
}

#[tokio::test]
async fn submit_contact_validation_failure_is_rejected_with_field_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/contact/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "message": "Validation failed",
            "errors": {"email": ["Enter a valid email address."]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .submit_contact(&contact_request(), Uuid::new_v4())
        .await
        .unwrap_err();
    match err {
        DispatchApiError::Rejected {
            status,
            message,
            errors,
            ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Validation failed");
            assert_eq!(errors["email"], vec!["Enter a valid email address."]);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_contact_html_error_page_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/contact/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .submit_contact(&contact_request(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(
        matches!(err, DispatchApiError::ApiError { status: 500, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn submit_contact_bare_failure_envelope_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/contact/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"success": false})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .submit_contact(&contact_request(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(
        matches!(err, DispatchApiError::ApiError { status: 500, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn submit_contact_errors_without_message_default_to_validation_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/contact/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "errors": {"phone": ["Enter a valid phone number."]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .submit_contact(&contact_request(), Uuid::new_v4())
        .await
        .unwrap_err();
    match err {
        DispatchApiError::Rejected { message, errors, .. } => {
            assert_eq!(message, "Validation failed");
            assert_eq!(errors["phone"], vec!["Enter a valid phone number."]);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_contact_slow_backend_times_out_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/contact/"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"success": true}))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = DispatchApiConfig::new(&mock_server.uri(), 1).unwrap();
    let client = DispatchClient::new(config).unwrap();
    let err = client
        .submit_contact(&contact_request(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(
        matches!(err, DispatchApiError::Timeout { .. }),
        "got {err:?}"
    );
}

// ── POST /api/v1/dispatch/claim/ ─────────────────────────────────────

#[tokio::test]
async fn submit_claim_forwards_normalized_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/claim/"))
        .and(header_exists("x-request-id"))
        .and(body_json(serde_json::json!({
            "full_name": "Sam Ortiz",
            "email": "sam@ortiz.io",
            "phone": "555-0199",
            "company_name": "Ortiz Hauling",
            "preferred_route": "Dallas to Atlanta",
            "age_of_mc_authority": 4
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "data": {"id": 7}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let form: ClaimForm = serde_json::from_value(serde_json::json!({
        "fullName": " Sam Ortiz ",
        "email": "Sam@Ortiz.io",
        "phone": " 555-0199 ",
        "companyName": "Ortiz Hauling",
        "preferredRoute": "Dallas to Atlanta",
        "ageOfMcAuthority": 4
    }))
    .unwrap();
    let accepted = test_client(&mock_server)
        .submit_claim(&form.to_request().unwrap(), Uuid::new_v4())
        .await
        .unwrap();
    assert!(accepted.message.is_none());
    assert_eq!(accepted.data.unwrap()["id"], 7);
}

// ── POST /api/v1/dispatch/signup/ ────────────────────────────────────

#[tokio::test]
async fn submit_signup_tags_type_and_drops_confirmation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dispatch/signup/"))
        .and(body_json(serde_json::json!({
            "signup_type": "owner-operator",
            "owner_name": "Dana Reyes",
            "owner_email": "dana@reyes.com",
            "owner_contact_number": "555-0101",
            "motor_carrier_no": "MC123",
            "authority_age": 1,
            "number_of_trucks": "0-7",
            "truck_type": "Hotshot",
            "operation_area": "Coastal",
            "first_name": "Dana",
            "last_name": "Reyes",
            "contact_number": "555-0101",
            "communication_method": "WhatsApp",
            "email": "dana@reyes.com",
            "password": "long-enough"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "message": "Signup received"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let form: SignupForm = serde_json::from_value(serde_json::json!({
        "signupType": "owner-operator",
        "ownerName": "Dana Reyes",
        "ownerEmail": "DANA@reyes.com",
        "ownerContactNumber": "555-0101",
        "motorCarrierNo": "MC123",
        "authorityAge": 1,
        "numberOfTrucks": "0-7",
        "truckType": "Hotshot",
        "operationArea": "Coastal",
        "firstName": "Dana",
        "lastName": "Reyes",
        "contactNumber": "555-0101",
        "communicationMethod": "WhatsApp",
        "email": "dana@reyes.com",
        "password": "long-enough",
        "confirmPassword": "long-enough",
        "agreeToTerms": true
    }))
    .unwrap();
    let accepted = test_client(&mock_server)
        .submit_signup(&form.to_request().unwrap(), Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(accepted.message.as_deref(), Some("Signup received"));
}

// ── Transport ────────────────────────────────────────────────────────

#[tokio::test]
async fn unreachable_backend_is_http_error() {
    let config = DispatchApiConfig::new("http://127.0.0.1:1", 2).unwrap();
    let client = DispatchClient::new(config).unwrap();
    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, DispatchApiError::Http { .. }), "got {err:?}");
}
