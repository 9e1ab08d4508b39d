use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    email_summary::{
        formatter::format_summary,
        ports::{EmailSummaryService, MailSender},
        value_objects::{OutgoingEmail, SendSummaryInput, is_missing_value},
    },
    skincare_analysis::ports::LLMClient,
};

pub const EMAIL_AND_RESULT_REQUIRED: &str = "Email and analysisResult are required.";

impl<LLM, M> EmailSummaryService for Service<LLM, M>
where
    LLM: LLMClient,
    M: MailSender,
{
    #[instrument(skip(self, input))]
    async fn send_summary(&self, input: SendSummaryInput) -> Result<(), CoreError> {
        if input.email.trim().is_empty() || is_missing_value(&input.analysis_result) {
            return Err(CoreError::Validation(EMAIL_AND_RESULT_REQUIRED.to_string()));
        }

        let result = self.normalizer.normalize(&input.analysis_result);
        let body = format_summary(&result);

        self.mailer
            .send(OutgoingEmail {
                from: self.mail_sender.clone(),
                to: input.email.trim().to_string(),
                subject: self.mail_subject.clone(),
                body,
            })
            .await?;

        info!("Analysis summary email sent");
        Ok(())
    }
}
