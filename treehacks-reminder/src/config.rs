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

//! Reminder configuration loaded from environment variables.

use std::env;
use std::fmt;

use reqwest::Url;

use crate::error::ReminderError;

pub const DEFAULT_SUBJECT: &str = "Take your medication";
pub const DEFAULT_MESSAGE: &str =
    "This is a reminder to take your medication and have a sip of water.";
pub const DEFAULT_FROM: &str = "Treehacks Reminder <onboarding@resend.dev>";
pub const DEFAULT_API_URL: &str = "https://api.resend.com/emails";

/// Configuration for one reminder run.
#[derive(Clone)]
pub struct ReminderConfig {
    /// Recipient address, trimmed.
    pub recipient: String,
    /// Resend API key, trimmed.
    pub api_key: String,
    pub subject: String,
    /// Plain-text body. Newlines become `<br>` in the e-mail.
    pub message: String,
    pub from: String,
    /// Endpoint the e-mail is POSTed to.
    pub api_url: String,
}

impl fmt::Debug for ReminderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReminderConfig")
            .field("recipient", &self.recipient)
            .field("api_key", &"<redacted>")
            .field("subject", &self.subject)
            .field("message", &self.message)
            .field("from", &self.from)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ReminderConfig {
    /// Load configuration from the process environment.
    ///
    /// # Required
    /// - `REMINDER_EMAIL`
    /// - `RESEND_API_KEY`
    ///
    /// # Optional
    /// - `REMINDER_SUBJECT` (default: `"Take your medication"`)
    /// - `REMINDER_MESSAGE`
    /// - `FROM_EMAIL` (default: `"Treehacks Reminder <onboarding@resend.dev>"`)
    /// - `RESEND_API_URL` (default: `"https://api.resend.com/emails"`)
    pub fn from_env() -> Result<Self, ReminderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReminderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let recipient = required(
            &lookup,
            "REMINDER_EMAIL",
            "Set it in the cron job's environment.",
        )?;
        let api_key = required(
            &lookup,
            "RESEND_API_KEY",
            "Get a key at https://resend.com/api-keys",
        )?;

        let api_url = optional(&lookup, "RESEND_API_URL", DEFAULT_API_URL);
        Url::parse(&api_url).map_err(|e| ReminderError::InvalidConfiguration {
            key: "RESEND_API_URL",
            reason: e.to_string(),
        })?;

        Ok(Self {
            recipient,
            api_key,
            subject: optional(&lookup, "REMINDER_SUBJECT", DEFAULT_SUBJECT),
            message: optional(&lookup, "REMINDER_MESSAGE", DEFAULT_MESSAGE),
            from: optional(&lookup, "FROM_EMAIL", DEFAULT_FROM),
            api_url,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str, hint: &'static str) -> Result<String, ReminderError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ReminderError::ConfigurationMissing { key, hint })
}

fn optional<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
