//! # SMTP Mailer
//!
//! `Mailer` implementation over lettre's async SMTP transport, using implicit
//! TLS (SMTPS) and optional login credentials.

use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use relay_core::{MailError, MailResult, Mailer, OutboundEmail};
use tracing::{debug, instrument};

/// Sends contact messages through an SMTP relay
pub struct SmtpMailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    /// Build the transport from `config`.
    ///
    /// No connection is opened here. Without a host the mailer is still
    /// created, and every send fails with a configuration error.
    pub fn new(config: SmtpConfig) -> MailResult<Self> {
        let Some(host) = config.host.as_deref() else {
            return Ok(Self { transport: None });
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| MailError::Configuration(format!("SMTP relay error: {}", e)))?;

        if let Some(port) = config.port {
            builder = builder.port(port);
        }

        if let Some((user, pass)) = config.credentials() {
            builder = builder.credentials(Credentials::new(user, pass));
        }

        Ok(Self {
            transport: Some(builder.build()),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> MailResult<Self> {
        Self::new(SmtpConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }
}

/// Assemble the plain-text message for `email`.
///
/// The sender is parsed from the interpolated `"<name>" <<email>>` string, so
/// caller-supplied quotes or brackets change how it is parsed.
pub fn build_message(email: &OutboundEmail) -> MailResult<Message> {
    let from: Mailbox = email
        .sender()
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidAddress(e.to_string()))?;

    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidAddress(e.to_string()))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(&email.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(email.text.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[instrument(skip(self, email), fields(to = %email.to))]
    async fn send(&self, email: &OutboundEmail) -> MailResult<()> {
        let transport = self
            .transport
            .as_ref()
            .ok_or_else(|| MailError::Configuration("SMTP_HOST not set".to_string()))?;

        let message = build_message(email)?;

        debug!("Submitting contact message to SMTP relay");
        transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }

    fn transport_name(&self) -> &'static str {
        "smtp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::ContactMessage;

    fn contact(name: &str, email: &str) -> OutboundEmail {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: "Bonjour, je voudrais en savoir plus.".to_string(),
        }
        .to_email("admin@alkyai.fr")
    }

    #[test]
    fn test_build_message() {
        let message = build_message(&contact("Ada Lovelace", "ada@example.com")).unwrap();

        let envelope = message.envelope();
        assert_eq!(
            envelope.from().map(|a| a.to_string()),
            Some("ada@example.com".to_string())
        );
        assert_eq!(envelope.to().len(), 1);
        assert_eq!(envelope.to()[0].to_string(), "admin@alkyai.fr");

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Nouveau message via le formulaire de contact"));
    }

    #[test]
    fn test_malformed_sender_is_rejected() {
        let err = build_message(&contact("Ada", "not-an-address")).unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
    }

    #[test]
    fn test_empty_form_is_rejected() {
        let email = ContactMessage::default().to_email("admin@alkyai.fr");
        assert!(build_message(&email).is_err());
    }

    #[tokio::test]
    async fn test_send_without_host_is_config_error() {
        let mailer = SmtpMailer::new(SmtpConfig::default()).unwrap();
        assert!(!mailer.is_configured());

        let err = mailer
            .send(&contact("Ada", "ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, MailError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_invalid_address_fails_before_connecting() {
        let mailer =
            SmtpMailer::new(SmtpConfig::new("smtp.invalid", "user", "pass").with_port(465)).unwrap();
        assert!(mailer.is_configured());

        let err = mailer
            .send(&contact("Ada", "not-an-address"))
            .await
            .unwrap_err();

        assert!(matches!(err, MailError::InvalidAddress(_)));
    }
}
