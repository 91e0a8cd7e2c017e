//! # Contact Relay Types
//!
//! Contact-form submission, the email built from it, and the `Mailer` seam.
//!
//! Fields are taken verbatim. The sender header is built by plain
//! interpolation of the caller's name and address, so a name containing
//! quotes or angle brackets reaches the mail layer unescaped.

use crate::error::MailResult;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;

/// Subject of every relayed contact message
pub const CONTACT_SUBJECT: &str = "Nouveau message via le formulaire de contact";

/// Confirmation returned to the caller once the mail is accepted
pub const CONTACT_CONFIRMATION: &str = "Votre Email a été envoyé !";

/// Default mailbox receiving contact messages
pub const DEFAULT_CONTACT_RECIPIENT: &str = "admin@alkyai.fr";

/// A contact-form submission
///
/// Any JSON type is accepted for each field. Missing or `null` fields become
/// empty strings; non-string values keep their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl ContactMessage {
    /// Build the outbound email addressed to `recipient`
    pub fn to_email(&self, recipient: &str) -> OutboundEmail {
        OutboundEmail {
            from_display: self.name.clone(),
            from_address: self.email.clone(),
            to: recipient.to_string(),
            subject: CONTACT_SUBJECT.to_string(),
            text: self.message.clone(),
        }
    }
}

/// A plain-text email ready to be handed to a `Mailer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from_display: String,
    pub from_address: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl OutboundEmail {
    /// `From` header value: `"<display>" <<address>>`, not escaped
    pub fn sender(&self) -> String {
        format!("\"{}\" <{}>", self.from_display, self.from_address)
    }
}

/// Submits emails to a mail transport
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Submit one message. No retry.
    async fn send(&self, email: &OutboundEmail) -> MailResult<()>;

    /// Transport name (for logging)
    fn transport_name(&self) -> &'static str;
}

/// Type alias for a shared mailer (dynamic dispatch)
pub type BoxedMailer = Arc<dyn Mailer>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_message_from_strings() {
        let msg: ContactMessage = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Bonjour"
        }))
        .unwrap();

        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "Bonjour");
    }

    #[test]
    fn test_contact_message_is_permissive() {
        let msg: ContactMessage = serde_json::from_value(json!({
            "name": null,
            "message": 42
        }))
        .unwrap();

        assert_eq!(msg.name, "");
        assert_eq!(msg.email, "");
        assert_eq!(msg.message, "42");
    }

    #[test]
    fn test_to_email() {
        let msg = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Line 1\nLine 2".into(),
        };
        let email = msg.to_email(DEFAULT_CONTACT_RECIPIENT);

        assert_eq!(email.to, "admin@alkyai.fr");
        assert_eq!(email.subject, CONTACT_SUBJECT);
        assert_eq!(email.text, "Line 1\nLine 2");
        assert_eq!(email.sender(), "\"Ada\" <ada@example.com>");
    }

    #[test]
    fn test_sender_is_not_escaped() {
        let msg = ContactMessage {
            name: "A\" <x@y.z>".into(),
            email: "ada@example.com".into(),
            message: String::new(),
        };

        assert_eq!(
            msg.to_email("admin@alkyai.fr").sender(),
            "\"A\" <x@y.z>\" <ada@example.com>"
        );
    }
}
