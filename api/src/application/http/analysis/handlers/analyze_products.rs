use axum::extract::State;
use skinrelay_core::domain::skincare_analysis::{
    entities::AnalysisResult, ports::SkincareAnalysisService, value_objects::AnalyzeProductsInput,
};

use crate::application::http::{
    analysis::validators::AnalyzeProductsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "analysis",
    summary = "Analyze skincare products",
    description = "Asks the generative model for usage guidance, a recommended AM/PM routine and ingredient conflicts for the given products.",
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse, description = "Products array is missing or empty"),
        (status = 500, body = ApiErrorResponse, description = "Model failure or invalid JSON from the model")
    ),
    request_body = AnalyzeProductsRequest
)]
pub async fn analyze_products(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeProductsRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .analyze_products(AnalyzeProductsInput {
            products: payload.into_products(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
