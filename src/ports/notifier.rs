//! Notifier port - outbound notification interface.
//!
//! Injected as a capability so handlers never touch a transport directly
//! and tests can substitute a recording double.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmailAddress};

/// A rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationMessage {
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
}

impl NotificationMessage {
    pub fn new(
        to: EmailAddress,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            to,
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}

/// Port for sending notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a single message.
    async fn send(&self, message: NotificationMessage) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Notifier) {}

    #[test]
    fn message_builder_accepts_string_likes() {
        let msg = NotificationMessage::new(
            EmailAddress::new("user@example.com").unwrap(),
            "Subject",
            "<p>Body</p>".to_string(),
        );
        assert_eq!(msg.subject, "Subject");
        assert_eq!(msg.html_body, "<p>Body</p>");
    }
}
