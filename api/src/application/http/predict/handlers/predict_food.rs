use axum::extract::{Multipart, State};
use foodlens_core::domain::recognition::entities::FoodPrediction;
use foodlens_core::domain::recognition::ports::FoodRecognitionService;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/predict",
    tag = "food",
    summary = "Analyze a food photo",
    description = "Classifies the uploaded photo and enriches the prediction with a display name and recipe",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = FoodPrediction),
        (status = 500, description = "Prediction failed")
    ),
)]
pub async fn predict_food<S: FoodRecognitionService>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> Result<Response<FoodPrediction>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name.as_str() == "file" {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "Image too large. Max size is {} bytes",
                    MAX_IMAGE_SIZE
                )));
            }

            image_data = Some(data.to_vec());
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let prediction = state
        .service
        .predict(image_data)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(prediction))
}
