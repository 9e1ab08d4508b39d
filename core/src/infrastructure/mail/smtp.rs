use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::domain::{
    common::{SmtpConfig, entities::app_errors::CoreError},
    email_summary::{ports::MailSender, value_objects::OutgoingEmail},
};

#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, CoreError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| {
                CoreError::Configuration(format!(
                    "Failed to initialize SMTP relay '{}': {}",
                    config.host, e
                ))
            })?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport })
    }
}

pub(crate) fn build_message(email: OutgoingEmail) -> Result<Message, CoreError> {
    let from: Mailbox = email.from.parse().map_err(|e| {
        CoreError::MailDeliveryError(format!("Invalid sender email '{}': {}", email.from, e))
    })?;
    let to: Mailbox = email.to.parse().map_err(|e| {
        CoreError::MailDeliveryError(format!("Invalid recipient email '{}': {}", email.to, e))
    })?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(|e| CoreError::MailDeliveryError(format!("Failed to build email message: {}", e)))
}

impl MailSender for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), CoreError> {
        let message = build_message(email)?;

        self.transport.send(message).await.map_err(|e| {
            tracing::error!("SMTP send failed: {}", e);
            CoreError::MailDeliveryError(format!("SMTP send failed: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: "noreply@skinrelay.test".to_string(),
            to: to.to_string(),
            subject: "Your Skincare Routine Analysis".to_string(),
            body: "Products:\n".to_string(),
        }
    }

    #[test]
    fn test_message_headers() {
        let message = build_message(email("ada@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: noreply@skinrelay.test"));
        assert!(raw.contains("To: ada@example.com"));
        assert!(raw.contains("Subject: Your Skincare Routine Analysis"));
    }

    #[test]
    fn test_invalid_recipient_is_a_delivery_error() {
        let err = build_message(email("not an address")).unwrap_err();
        assert!(matches!(err, CoreError::MailDeliveryError(_)));
    }
}
