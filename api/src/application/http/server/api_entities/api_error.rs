use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use skinrelay_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub const ANALYSIS_FAILED: &str = "Failed to process the request.";
pub const INVALID_MODEL_JSON: &str = "Gemini returned invalid JSON.";
pub const EMAIL_FAILED: &str = "Failed to send email.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ApiErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::InvalidModelResponse(cause) => {
                tracing::error!(%cause, "Model returned unparseable output");
                ApiError::InternalServerError(INVALID_MODEL_JSON.to_string())
            }
            CoreError::MailDeliveryError(cause) => {
                tracing::error!(%cause, "Failed to deliver email");
                ApiError::InternalServerError(EMAIL_FAILED.to_string())
            }
            other => {
                tracing::error!(cause = %other, "Request failed");
                ApiError::InternalServerError(ANALYSIS_FAILED.to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
            .unwrap_or_else(|| errors.to_string());

        ApiError::BadRequest(message)
    }
}

/// JSON body extractor that also runs `validator` rules.
///
/// A body that cannot be read as `T` is validated as `T::default()`, so the
/// client always gets the field's own validation message.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => value,
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Unreadable request body");
                T::default()
            }
        };

        value.validate()?;

        Ok(ValidateJson(value))
    }
}
