pub mod sendgrid;
pub mod smtp;

pub use sendgrid::SendGridMailer;
pub use smtp::SmtpMailer;

use crate::domain::{
    common::{MailConfig, MailTransportConfig, entities::app_errors::CoreError},
    email_summary::{ports::MailSender, value_objects::OutgoingEmail},
};

/// Mail transport chosen once at startup from configuration.
#[derive(Clone)]
pub enum MailTransport {
    SendGrid(SendGridMailer),
    Smtp(SmtpMailer),
}

impl MailTransport {
    pub fn from_config(config: &MailConfig) -> Result<Self, CoreError> {
        match &config.transport {
            MailTransportConfig::SendGrid { api_key } => {
                tracing::info!("Using SendGrid mail transport");
                Ok(Self::SendGrid(SendGridMailer::new(api_key.clone())))
            }
            MailTransportConfig::Smtp(smtp) => {
                tracing::info!(host = %smtp.host, port = smtp.port, "Using SMTP mail transport");
                Ok(Self::Smtp(SmtpMailer::new(smtp)?))
            }
        }
    }
}

impl MailSender for MailTransport {
    async fn send(&self, email: OutgoingEmail) -> Result<(), CoreError> {
        match self {
            Self::SendGrid(mailer) => mailer.send(email).await,
            Self::Smtp(mailer) => mailer.send(email).await,
        }
    }
}
