use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured prediction returned for an uploaded food photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodPrediction {
    /// Raw label selected by the classifier.
    pub food_name_en: String,
    /// Display name confirmed or corrected by the enrichment model.
    pub food_name_tr: String,
    /// Maximum value of the classifier's output vector.
    pub confidence: f32,
    /// Recipe text produced by the enrichment model.
    pub recipe: String,
}
