use crate::application::http::{analysis::router::AnalysisApiDoc, email::router::EmailApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkinRelay API"
    ),
    nest(
        (path = "/analyze", api = AnalysisApiDoc),
        (path = "/send-email", api = EmailApiDoc),
    )
)]
pub struct ApiDoc;
