use reqwest::Client;
use serde::Serialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    email_summary::{ports::MailSender, value_objects::OutgoingEmail},
};

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Clone)]
pub struct SendGridMailer {
    api_key: String,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendGridRequest {
    personalizations: Vec<Personalization>,
    from: Address,
    subject: String,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
struct Personalization {
    to: Vec<Address>,
}

#[derive(Debug, Serialize)]
struct Address {
    email: String,
}

#[derive(Debug, Serialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

impl From<OutgoingEmail> for SendGridRequest {
    fn from(email: OutgoingEmail) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: email.to }],
            }],
            from: Address { email: email.from },
            subject: email.subject,
            content: vec![ContentBlock {
                content_type: "text/plain".to_string(),
                value: email.body,
            }],
        }
    }
}

impl SendGridMailer {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, SENDGRID_SEND_URL.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            client: Client::new(),
        }
    }
}

impl MailSender for SendGridMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), CoreError> {
        let request = SendGridRequest::from(email);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("SendGrid request failed: {}", e);
                CoreError::MailDeliveryError(format!("SendGrid error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("SendGrid API error: {} - {}", status, error_text);
            return Err(CoreError::MailDeliveryError(format!(
                "SendGrid returned error: {} - {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
