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

//! One-shot reminder e-mail sender, run on a schedule by a cron job.
//!
//! # Example
//!
//! ```no_run
//! use treehacks_reminder::{send_reminder, ReminderConfig};
//!
//! # async fn example() -> Result<(), treehacks_reminder::ReminderError> {
//! let config = ReminderConfig::from_env()?;
//! let sent = send_reminder(&config).await?;
//! println!("sent, id: {:?}", sent.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod email;
pub mod error;

pub use client::ResendClient;
pub use config::ReminderConfig;
pub use email::{render_html, EmailRequest, SendResponse};
pub use error::ReminderError;

/// Build the reminder e-mail from `config` and send it.
pub async fn send_reminder(config: &ReminderConfig) -> Result<SendResponse, ReminderError> {
    let client = ResendClient::new(&config.api_url, &config.api_key);
    let email = EmailRequest::reminder(config);
    tracing::debug!("Sending reminder to {} via {}", config.recipient, config.api_url);
    client.send(&email).await
}
