use crate::domain::{
    common::{LLMConfig, MailConfig},
    email_summary::ports::MailSender,
    skincare_analysis::{normalizer::ResponseNormalizer, ports::LLMClient},
};

#[derive(Clone)]
pub struct Service<LLM, M>
where
    LLM: LLMClient,
    M: MailSender,
{
    pub(crate) llm_client: LLM,
    pub(crate) mailer: M,
    pub(crate) candidate_models: Vec<String>,
    pub(crate) mail_sender: String,
    pub(crate) mail_subject: String,
    pub(crate) normalizer: ResponseNormalizer,
}

impl<LLM, M> Service<LLM, M>
where
    LLM: LLMClient,
    M: MailSender,
{
    pub fn new(llm_client: LLM, mailer: M, llm: &LLMConfig, mail: &MailConfig) -> Self {
        Self {
            llm_client,
            mailer,
            candidate_models: llm.gemini_models.clone(),
            mail_sender: mail.sender.clone(),
            mail_subject: mail.subject.clone(),
            normalizer: ResponseNormalizer::default(),
        }
    }

    /// Replaces the default normalizer, e.g. to accept more legacy conflict shapes.
    pub fn with_normalizer(mut self, normalizer: ResponseNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }
}
