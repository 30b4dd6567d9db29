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

//! E-mail payload sent to the provider.

use serde::{Deserialize, Serialize};

use crate::config::ReminderConfig;

/// Body of `POST /emails`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

impl EmailRequest {
    pub fn reminder(config: &ReminderConfig) -> Self {
        Self {
            from: config.from.clone(),
            to: vec![config.recipient.clone()],
            subject: config.subject.clone(),
            html: render_html(&config.message),
        }
    }
}

/// Provider reply on success. Only the message id is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub id: Option<String>,
}

/// Wrap a plain-text message in the reminder's HTML template.
pub fn render_html(message: &str) -> String {
    format!(
        r#"
        <div style="font-family: sans-serif; max-width: 480px; margin: 0 auto;">
          <p style="font-size: 18px; line-height: 1.6; color: #333;">{}</p>
          <p style="font-size: 14px; color: #888; margin-top: 24px;">Sent by Treehacks reminder.</p>
        </div>
      "#,
        message.replace('\n', "<br>")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn newlines_become_line_breaks() {
        let html = render_html("Take one pill.\nDrink water.");
        assert!(html.contains("Take one pill.<br>Drink water."));
        assert!(html.contains("Sent by Treehacks reminder."));
    }

    #[test]
    fn request_serializes_to_provider_shape() {
        let request = EmailRequest {
            from: "A <a@example.com>".into(),
            to: vec!["b@example.com".into()],
            subject: "Hi".into(),
            html: "<p>x</p>".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "from": "A <a@example.com>",
                "to": ["b@example.com"],
                "subject": "Hi",
                "html": "<p>x</p>",
            })
        );
    }

    #[test]
    fn response_without_id_parses() {
        let parsed: SendResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.id, None);
    }
}
