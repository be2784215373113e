//! Resend email adapter for the Notifier port.
//!
//! - Secrets handled via `secrecy::SecretString`
//! - Delivery failures surface as `NotificationFailed` for the caller to
//!   decide whether they are fatal

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{NotificationMessage, Notifier};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Sends notifications through the Resend HTTP API.
pub struct ResendNotifier {
    client: reqwest::Client,
    api_key: SecretString,
    from_header: String,
}

impl ResendNotifier {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            from_header: config.from_header(),
            api_key: SecretString::new(config.resend_api_key),
        }
    }
}

#[derive(Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send(&self, message: NotificationMessage) -> Result<(), DomainError> {
        let payload = SendEmailPayload {
            from: &self.from_header,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html_body,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::NotificationFailed,
                    format!("Email request failed: {}", e),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::new(
                ErrorCode::NotificationFailed,
                format!("Email provider returned {}: {}", status, body),
            ));
        }

        tracing::debug!(to = %message.to, "notification email accepted by provider");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_expected_shape() {
        let payload = SendEmailPayload {
            from: "RiskGauge <noreply@riskgauge.app>",
            to: ["user@example.com"],
            subject: "Your risk profile assessment",
            html: "<p>Growth</p>",
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["to"][0], "user@example.com");
        assert_eq!(json["subject"], "Your risk profile assessment");
        assert!(json["from"].as_str().unwrap().contains('<'));
    }

    #[test]
    fn notifier_builds_from_config() {
        let notifier = ResendNotifier::new(EmailConfig {
            resend_api_key: "re_test_key".to_string(),
            from_email: "noreply@riskgauge.app".to_string(),
            from_name: "RiskGauge".to_string(),
        });
        assert_eq!(notifier.from_header, "RiskGauge <noreply@riskgauge.app>");
    }
}
