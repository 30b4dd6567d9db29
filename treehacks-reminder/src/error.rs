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

//! Error types for the reminder sender.

use thiserror::Error;

/// Everything that can stop a reminder from going out.
#[derive(Debug, Error)]
pub enum ReminderError {
    /// A required environment variable is unset or blank.
    #[error("{key} is not set. {hint}")]
    ConfigurationMissing {
        key: &'static str,
        hint: &'static str,
    },

    /// An environment variable is set but unusable.
    #[error("{key} is invalid: {reason}")]
    InvalidConfiguration { key: &'static str, reason: String },

    /// The e-mail provider answered with a non-2xx status.
    #[error("Resend API error: {status} {body}")]
    DeliveryRejected {
        status: u16,
        body: serde_json::Value,
    },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
