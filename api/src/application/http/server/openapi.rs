use crate::application::http::{health::HealthApiDoc, ski_field::router::SkiFieldApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ski Field Tracker API"
    ),
    nest(
        (path = "/api/skifields", api = SkiFieldApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
