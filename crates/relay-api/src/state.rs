//! # Application State
//!
//! Shared state for the Axum application: configuration plus the two
//! external clients, built once at startup and injected into every handler.

use relay_core::{BoxedMailer, BoxedPaymentStrategy, DEFAULT_CONTACT_RECIPIENT};
use relay_smtp::SmtpMailer;
use relay_stripe::StripeCheckoutStrategy;
use std::env;
use std::sync::Arc;

/// Port used when `PORT` is absent or unparseable
pub const DEFAULT_PORT: u16 = 10000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Mailbox receiving contact-form messages
    pub contact_recipient: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            contact_recipient: lookup("CONTACT_RECIPIENT")
                .unwrap_or_else(|| DEFAULT_CONTACT_RECIPIENT.to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}: {}", addr, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Contact-form mail transport
    pub mailer: BoxedMailer,
    /// Checkout session provider
    pub payments: BoxedPaymentStrategy,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from the environment with the SMTP and Stripe clients
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let mailer = SmtpMailer::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize SMTP: {}", e))?;
        if !mailer.is_configured() {
            tracing::warn!("SMTP_HOST not set, /send-email will fail");
        }

        let stripe = StripeCheckoutStrategy::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;
        if stripe.config().secret_key.is_none() {
            tracing::warn!("STRIPE_SECRET_KEY not set, checkout endpoints will fail");
        } else if stripe.config().is_test_mode() {
            tracing::info!("Stripe running with a test key");
        }

        Ok(Self::with_clients(config, Arc::new(mailer), Arc::new(stripe)))
    }

    /// Build state from explicit clients
    pub fn with_clients(
        config: AppConfig,
        mailer: BoxedMailer,
        payments: BoxedPaymentStrategy,
    ) -> Self {
        Self {
            mailer,
            payments,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 10000);
        assert_eq!(config.contact_recipient, "admin@alkyai.fr");
        assert!(!config.is_production());
    }

    #[test]
    fn test_app_config_from_vars() {
        let vars = HashMap::from([
            ("PORT", "3000"),
            ("ENVIRONMENT", "production"),
            ("CONTACT_RECIPIENT", "contact@example.com"),
        ]);
        let config = AppConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.contact_recipient, "contact@example.com");
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = AppConfig::from_vars(|k| (k == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "test".to_string(),
            contact_recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
        };

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_host() {
        let config = AppConfig::from_vars(|k| (k == "HOST").then(|| "not a host".to_string()));
        assert!(config.socket_addr().is_err());
    }
}
