//! # relay-smtp
//!
//! SMTP mail transport for the contact & checkout relay.
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SMTP_HOST` | SMTP server hostname |
//! | `SMTP_PORT` | Port (default: 465, implicit TLS) |
//! | `SMTP_USER` | Username for authentication |
//! | `SMTP_PASS` | Password for authentication |

pub mod config;
pub mod mailer;

pub use config::SmtpConfig;
pub use mailer::{build_message, SmtpMailer};
