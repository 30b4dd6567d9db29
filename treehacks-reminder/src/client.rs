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

//! HTTP client for the Resend e-mail API.

use reqwest::Client;
use serde_json::Value;

use crate::email::{EmailRequest, SendResponse};
use crate::error::ReminderError;

/// Sends e-mails through a Resend-compatible endpoint.
#[derive(Clone)]
pub struct ResendClient {
    api_url: String,
    api_key: String,
    http: Client,
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ResendClient {
    /// Create a client for the given endpoint (e.g. `"https://api.resend.com/emails"`).
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            http: Client::new(),
        }
    }

    /// POST one e-mail. Any non-2xx status becomes
    /// [`ReminderError::DeliveryRejected`] carrying the parsed body
    /// (`{}` when the body is not JSON).
    pub async fn send(&self, email: &EmailRequest) -> Result<SendResponse, ReminderError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body: Value =
            serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Default::default()));

        if !status.is_success() {
            return Err(ReminderError::DeliveryRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_value(body).unwrap_or_default())
    }
}
