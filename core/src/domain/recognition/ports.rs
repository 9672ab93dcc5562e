use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::recognition::entities::FoodPrediction;

/// Service trait for the predict flow: classify the uploaded image, then
/// enrich the result with the external model.
pub trait FoodRecognitionService: Clone + Send + Sync + 'static {
    fn predict(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<FoodPrediction, CoreError>> + Send;
}
