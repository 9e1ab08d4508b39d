use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinrelay_core::domain::email_summary::{ports::EmailSummaryService, value_objects::SendSummaryInput};
use utoipa::ToSchema;

use crate::application::http::{
    email::validators::SendEmailRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "email",
    summary = "Email an analysis summary",
    description = "Formats a previously returned analysis as plain text and delivers it to the given address.",
    responses(
        (status = 200, body = SendEmailResponse),
        (status = 400, body = ApiErrorResponse, description = "Email or analysisResult missing"),
        (status = 500, body = ApiErrorResponse, description = "Delivery failed")
    ),
    request_body = SendEmailRequest
)]
pub async fn send_email(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendEmailRequest>,
) -> Result<Response<SendEmailResponse>, ApiError> {
    state
        .service
        .send_summary(SendSummaryInput::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SendEmailResponse {
        message: "Email sent successfully!".to_string(),
    }))
}
