//! # SMTP Configuration
//!
//! Mail transport settings loaded from environment variables.
//! Nothing here is mandatory at startup; a missing host is reported when a
//! message is sent.

use std::env;
use tracing::warn;

/// SMTP transport configuration
#[derive(Debug, Clone, Default)]
pub struct SmtpConfig {
    /// Server hostname (`SMTP_HOST`)
    pub host: Option<String>,

    /// Port (`SMTP_PORT`); implicit-TLS submission port 465 when absent
    pub port: Option<u16>,

    /// Login user (`SMTP_USER`)
    pub username: Option<String>,

    /// Login password (`SMTP_PASS`)
    pub password: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("SMTP_PORT").and_then(|p| match p.trim().parse() {
            Ok(port) => Some(port),
            Err(_) => {
                warn!("Ignoring invalid SMTP_PORT: {}", p);
                None
            }
        });

        Self {
            host: lookup("SMTP_HOST").filter(|h| !h.is_empty()),
            port,
            username: lookup("SMTP_USER"),
            password: lookup("SMTP_PASS"),
        }
    }

    /// Create config for a host with credentials
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            port: None,
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Builder: set port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Credentials are only used when both user and password are set
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_vars() {
        let vars = HashMap::from([
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "465"),
            ("SMTP_USER", "relay@example.com"),
            ("SMTP_PASS", "hunter2"),
        ]);
        let config = SmtpConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.host.as_deref(), Some("smtp.example.com"));
        assert_eq!(config.port, Some(465));
        assert_eq!(
            config.credentials(),
            Some(("relay@example.com".to_string(), "hunter2".to_string()))
        );
    }

    #[test]
    fn test_invalid_port_is_dropped() {
        let config = SmtpConfig::from_vars(|k| (k == "SMTP_PORT").then(|| "smtp".to_string()));

        assert_eq!(config.port, None);
        assert!(config.host.is_none());
    }

    #[test]
    fn test_partial_credentials_are_ignored() {
        let config = SmtpConfig::from_vars(|k| (k == "SMTP_USER").then(|| "relay".to_string()));
        assert!(config.credentials().is_none());
    }
}
