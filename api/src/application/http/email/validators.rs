use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use skinrelay_core::domain::{
    email_summary::{
        services::EMAIL_AND_RESULT_REQUIRED,
        value_objects::{SendSummaryInput, is_missing_value},
    },
    skincare_analysis::entities::AnalysisResult,
};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    #[serde(default)]
    #[validate(
        required(message = "Email and analysisResult are required."),
        custom(function = "validate_email")
    )]
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: Option<Value>,

    /// A result previously returned by `/analyze`.
    #[serde(default)]
    #[validate(
        required(message = "Email and analysisResult are required."),
        custom(function = "validate_analysis_result")
    )]
    #[schema(value_type = AnalysisResult)]
    pub analysis_result: Option<Value>,
}

impl From<SendEmailRequest> for SendSummaryInput {
    fn from(request: SendEmailRequest) -> Self {
        SendSummaryInput {
            email: request
                .email
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            analysis_result: request.analysis_result.unwrap_or_default(),
        }
    }
}

fn required_error() -> ValidationError {
    ValidationError::new("required").with_message(Cow::Borrowed(EMAIL_AND_RESULT_REQUIRED))
}

fn validate_email(email: &Value) -> Result<(), ValidationError> {
    match email.as_str() {
        Some(address) if !address.trim().is_empty() => Ok(()),
        _ => Err(required_error()),
    }
}

fn validate_analysis_result(result: &Value) -> Result<(), ValidationError> {
    if is_missing_value(result) {
        return Err(required_error());
    }
    Ok(())
}
