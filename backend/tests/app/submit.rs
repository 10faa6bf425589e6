use crate::helpers::spawn_app;
use claim::assert_some_eq;
use hyper::StatusCode;
use interfacing::{ErrorBody, LeadAck};
use serde_json::json;

use static_routes::*;

#[tokio::test]
async fn valid_lead_is_acknowledged_and_stored() {
    let app = spawn_app().await;

    let response = app
        .post_submit(&json!({
            "name": "Ursula",
            "email": "ursula@example.com",
            "message": "Tell me more"
        }))
        .await;

    assert_eq!(StatusCode::OK, response.status());
    let ack: LeadAck = response.json().await.unwrap();
    assert_eq!(ack, LeadAck::thanks());
    assert_eq!(ack.message, "Thank you for reaching out!");

    let leads = app.leads.all().await;
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Ursula");
    assert_eq!(leads[0].email, "ursula@example.com");
    assert_eq!(leads[0].message, "Tell me more");
}

#[tokio::test]
async fn name_and_message_are_optional() {
    let app = spawn_app().await;

    let response = app.post_submit(&json!({ "email": "ursula@example.com" })).await;
    assert_eq!(StatusCode::OK, response.status());

    let leads = app.leads.all().await;
    assert_eq!(leads[0].name, "Anonymous");
    assert_eq!(leads[0].message, "");
}

#[tokio::test]
async fn missing_email_is_rejected() {
    let app = spawn_app().await;

    let test_cases = [
        (json!({ "name": "Ursula" }), "missing email"),
        (json!({ "name": "Ursula", "email": "" }), "empty email"),
        (json!({}), "empty form"),
    ];

    for (body, description) in test_cases {
        let response = app.post_submit(&body).await;

        assert_eq!(
            StatusCode::BAD_REQUEST,
            response.status(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let error: ErrorBody = response.json().await.unwrap();
        assert_eq!(error.error, "Email is required", "{}", description);
    }

    assert_eq!(app.leads.len().await, 0);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .post(routes().api.submit)
        .header("Content-Type", "application/json")
        .body("{\"email\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let error: ErrorBody = response.json().await.unwrap();
    assert!(!error.error.is_empty());
    assert_eq!(app.leads.len().await, 0);
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = spawn_app().await;

    let response = app
        .get(routes().api.submit)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::METHOD_NOT_ALLOWED, response.status());
    let error: ErrorBody = response.json().await.unwrap();
    assert_eq!(error.error, "Method not allowed");
}

#[tokio::test]
async fn every_lead_gets_its_own_id() {
    let app = spawn_app().await;

    for email in ["a@example.com", "b@example.com"] {
        let response = app.post_submit(&json!({ "email": email })).await;
        assert_eq!(StatusCode::OK, response.status());
    }

    let leads = app.leads.all().await;
    assert_eq!(leads.len(), 2);
    assert_ne!(leads[0].id, leads[1].id);
    assert_some_eq!(leads.last().map(|lead| lead.email.as_str()), "b@example.com");
}
