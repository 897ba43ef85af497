//! Transactional email via SMTP.
//!
//! When SMTP is not configured (no SMTP_HOST), outgoing messages are
//! logged instead of sent, which is the expected development setup.

use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::env;

use crate::errors::{AppError, AppResult};

/// SMTP configuration from environment.
struct MailerConfig {
    smtp_host: Option<String>,
    smtp_user: Option<String>,
    smtp_pass: Option<String>,
    smtp_from: String,
}

impl MailerConfig {
    fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_pass: env::var("SMTP_PASS").ok(),
            smtp_from: env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@barberqueue.app".to_string()),
        }
    }
}

/// Outbound email sender shared across request handlers.
pub struct Mailer {
    from: String,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl Mailer {
    /// Build the mailer from SMTP_* environment variables.
    ///
    /// # Panics
    /// Panics if SMTP_HOST is set but the relay cannot be constructed.
    pub fn from_env() -> Self {
        let config = MailerConfig::from_env();

        let transport = config.smtp_host.as_deref().map(|host| {
            let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .expect("Failed to build SMTP transport");

            if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_pass) {
                builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
            }

            builder.build()
        });

        if transport.is_none() {
            tracing::warn!("SMTP not configured - outgoing email will be logged, not sent");
        }

        Self {
            from: config.smtp_from,
            transport,
        }
    }

    /// Send a plain-text email.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let Some(transport) = &self.transport else {
            // Development mode: log the email instead of sending
            tracing::info!(
                "=== EMAIL (not sent) ===\n\
                 From: {}\n\
                 To: {}\n\
                 Subject: {}\n\
                 Body:\n{}\n\
                 ========================",
                self.from,
                to,
                subject,
                body
            );
            return Ok(());
        };

        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AppError::internal(format!("Invalid sender address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::internal(format!("Invalid recipient address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::internal(format!("Failed to build email: {}", e)))?;

        transport
            .send(email)
            .await
            .map_err(|e| AppError::internal(format!("Failed to send email: {}", e)))?;

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}
