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

//! Reminder sender entry point.
//!
//! Exits non-zero when configuration is missing or the provider rejects the
//! e-mail, so the scheduler records the run as failed.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use treehacks_reminder::{send_reminder, ReminderConfig, ReminderError};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ReminderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match send_reminder(&config).await {
        Ok(sent) => {
            tracing::info!(
                "Reminder email sent to {} id: {}",
                config.recipient,
                sent.id.as_deref().unwrap_or("<none>")
            );
            ExitCode::SUCCESS
        }
        Err(ReminderError::DeliveryRejected { status, body }) => {
            tracing::error!("Resend API error: {status} {body}");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Failed to send reminder: {e}");
            ExitCode::FAILURE
        }
    }
}
