use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    email_summary::value_objects::{OutgoingEmail, SendSummaryInput},
};

/// Outbound mail delivery (SMTP relay or transactional email API)
#[cfg_attr(test, mockall::automock)]
pub trait MailSender: Send + Sync {
    fn send(&self, email: OutgoingEmail) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for emailing analysis summaries
#[cfg_attr(test, mockall::automock)]
pub trait EmailSummaryService: Send + Sync {
    fn send_summary(
        &self,
        input: SendSummaryInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
