/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Sends reminders against a local stand-in for the Resend endpoint.

mod common;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use common::{serve, spawn_endpoint};
use serde_json::json;
use treehacks_reminder::{send_reminder, ReminderConfig, ReminderError};

fn config_for(api_url: &str) -> ReminderConfig {
    let api_url = api_url.to_string();
    ReminderConfig::from_lookup(move |key| match key {
        "REMINDER_EMAIL" => Some(" patient@example.com ".into()),
        "RESEND_API_KEY" => Some("re_test".into()),
        "REMINDER_MESSAGE" => Some("Pill time.\nWater too.".into()),
        "RESEND_API_URL" => Some(api_url.clone()),
        _ => None,
    })
    .unwrap()
}

#[tokio::test]
async fn test_successful_send_returns_message_id() {
    let (url, seen) = spawn_endpoint(StatusCode::OK, json!({ "id": "msg_123" })).await;

    let sent = send_reminder(&config_for(&url)).await.unwrap();

    assert_eq!(sent.id.as_deref(), Some("msg_123"));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, payload) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer re_test"));
    assert_eq!(payload["to"], json!(["patient@example.com"]));
    assert_eq!(payload["subject"], json!("Take your medication"));
    assert_eq!(
        payload["from"],
        json!("Treehacks Reminder <onboarding@resend.dev>")
    );
    assert!(payload["html"]
        .as_str()
        .unwrap()
        .contains("Pill time.<br>Water too."));
}

#[tokio::test]
async fn test_non_2xx_is_delivery_rejected_with_body() {
    let (url, _) = spawn_endpoint(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "name": "validation_error", "message": "Invalid `to` field" }),
    )
    .await;

    let err = send_reminder(&config_for(&url)).await.unwrap_err();

    match err {
        ReminderError::DeliveryRejected { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body["name"], json!("validation_error"));
        }
        other => panic!("expected DeliveryRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_becomes_empty_object() {
    let app = Router::new().route(
        "/emails",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let url = serve(app).await;

    let err = send_reminder(&config_for(&url)).await.unwrap_err();

    match err {
        ReminderError::DeliveryRejected { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, json!({}));
        }
        other => panic!("expected DeliveryRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = send_reminder(&config_for(&format!("http://{addr}/emails")))
        .await
        .unwrap_err();

    assert!(matches!(err, ReminderError::Network(_)));
}
