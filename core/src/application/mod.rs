use crate::{
    domain::common::{SkinRelayConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::GeminiLLMClient, mail::MailTransport},
};

pub type SkinRelayService = Service<GeminiLLMClient, MailTransport>;

pub fn create_service(config: SkinRelayConfig) -> Result<SkinRelayService, CoreError> {
    if config.llm.gemini_models.is_empty() {
        return Err(CoreError::Configuration(
            "at least one Gemini model must be configured".to_string(),
        ));
    }

    let llm_client = GeminiLLMClient::from_config(&config.llm);
    let mailer = MailTransport::from_config(&config.mail)?;

    tracing::info!(models = ?config.llm.gemini_models, "SkinRelay service initialized");

    Ok(Service::new(llm_client, mailer, &config.llm, &config.mail))
}
