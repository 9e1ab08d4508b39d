use super::handlers::analyze_products::{__path_analyze_products, analyze_products};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_products))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze", state.args.server.root_path),
        post(analyze_products),
    )
}
