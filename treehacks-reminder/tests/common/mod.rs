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

//! A local stand-in for the Resend `/emails` endpoint, shared by the
//! integration tests.

use std::sync::{Arc, Mutex};

use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

pub type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Start a server answering every POST /emails with `status` and `reply`.
pub async fn spawn_endpoint(status: StatusCode, reply: Value) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();
    let app = Router::new().route(
        "/emails",
        post(move |headers: HeaderMap, Json(payload): Json<Value>| {
            let recorded = recorded.clone();
            let reply = reply.clone();
            async move {
                let auth = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                recorded.lock().unwrap().push((auth, payload));
                (status, Json(reply))
            }
        }),
    );
    (serve(app).await, seen)
}

pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/emails")
}
