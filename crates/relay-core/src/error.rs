//! # Relay Error Types
//!
//! Typed errors for the two external collaborators.
//! Checkout operations return `Result<T, PaymentError>`, mail operations
//! return `Result<T, MailError>`.

use thiserror::Error;

/// Error type for checkout session creation
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Amount is missing, not numeric, or not strictly positive
    #[error("{message}")]
    InvalidAmount { message: String },

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Message surfaced to API callers.
    ///
    /// Provider errors carry the provider's own message, without the
    /// `Provider error [..]` prefix used in logs.
    pub fn detail(&self) -> String {
        match self {
            PaymentError::ProviderError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for checkout operations
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Error type for outbound mail
#[derive(Debug, Error)]
pub enum MailError {
    /// Missing or unusable SMTP settings
    #[error("SMTP configuration error: {0}")]
    Configuration(String),

    /// Sender or recipient could not be parsed as a mailbox
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Message could not be assembled
    #[error("Message building failed: {0}")]
    Build(String),

    /// Connection, TLS, authentication or submission failure
    #[error("Email sending failed: {0}")]
    Transport(String),
}

/// Result type alias for mail operations
pub type MailResult<T> = Result<T, MailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_detail_is_raw_message() {
        let err = PaymentError::ProviderError {
            provider: "stripe".into(),
            message: "Invalid API Key provided: sk_test_***".into(),
        };

        assert_eq!(err.detail(), "Invalid API Key provided: sk_test_***");
        assert_eq!(
            err.to_string(),
            "Provider error [stripe]: Invalid API Key provided: sk_test_***"
        );
    }

    #[test]
    fn test_invalid_amount_displays_message_only() {
        let err = PaymentError::InvalidAmount {
            message: "amount must be a valid number".into(),
        };
        assert_eq!(err.detail(), "amount must be a valid number");
    }

    #[test]
    fn test_mail_error_display() {
        let err = MailError::Configuration("SMTP_HOST not set".into());
        assert_eq!(err.to_string(), "SMTP configuration error: SMTP_HOST not set");
    }
}
