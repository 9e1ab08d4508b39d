use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Missing or empty required input, the caller's fault.
    #[error("validation error: {0}")]
    Validation(String),

    /// The model API was unreachable or rejected every candidate model.
    #[error("external service error: {0}")]
    ExternalServiceError(String),

    /// The model replied but its text is not parseable JSON.
    #[error("invalid JSON from model: {0}")]
    InvalidModelResponse(String),

    #[error("mail delivery error: {0}")]
    MailDeliveryError(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}
