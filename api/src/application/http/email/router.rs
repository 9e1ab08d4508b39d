use super::handlers::send_email::{__path_send_email, send_email};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(send_email))]
pub struct EmailApiDoc;

pub fn email_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/send-email", state.args.server.root_path),
        post(send_email),
    )
}
