//! SMTP Mailer
//!
//! Async SMTP transport for verification mail. Delivery errors map to the
//! mail failure variant so callers can tell "did not send" from "sent".

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::repository::{MailMessage, Mailer};
use crate::error::{AuthError, AuthResult};

/// SMTP-backed mailer
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a relay transport with credentials
    pub fn new(relay: &str, username: String, password: String) -> AuthResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)
            .map_err(|e| AuthError::Mail(e.to_string()))?
            .credentials(Credentials::new(username, password))
            .build();
        Ok(Self { transport })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> AuthResult<()> {
        let email = Message::builder()
            .from(
                message
                    .from
                    .parse()
                    .map_err(|e: lettre::address::AddressError| AuthError::Mail(e.to_string()))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|e: lettre::address::AddressError| AuthError::Mail(e.to_string()))?)
            .subject(&message.subject)
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())
            .map_err(|e| AuthError::Mail(e.to_string()))?;

        match self.transport.send(email).await {
            Ok(_) => {
                tracing::info!(to = %message.to, "Email sent");
                Ok(())
            }
            Err(e) => {
                tracing::error!(to = %message.to, error = %e, "Failed to send email");
                Err(AuthError::Mail(e.to_string()))
            }
        }
    }
}
