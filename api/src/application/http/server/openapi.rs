use utoipa::OpenApi;

use crate::application::http::health::router::HealthApiDoc;
use crate::application::http::predict::router::PredictApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Recognition API"
    ),
    nest(
        // utoipa's derive rejects a literal "" nest path; an equivalent
        // expression passes through to the runtime `.nest()` unchanged.
        (path = concat!(""), api = PredictApiDoc),
        (path = concat!(""), api = HealthApiDoc)
    )
)]
pub struct ApiDoc;
