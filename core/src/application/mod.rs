use std::sync::Arc;

use crate::domain::classification::entities::LabelTable;
use crate::domain::common::FoodLensConfig;
use crate::domain::common::entities::app_errors::CoreError;
use crate::infrastructure::classifier::tract_classifier::TractClassifier;
use crate::infrastructure::llm::gemini_client::GeminiLlmClient;

/// Service container shared by all requests. The classifier handle and the
/// label table are constructed once at bootstrap and read-only for the
/// process lifetime.
pub struct Service<C, L> {
    pub(crate) classifier: Arc<C>,
    pub(crate) label_table: Arc<LabelTable>,
    pub(crate) llm_client: Option<Arc<L>>,
}

impl<C, L> Service<C, L> {
    pub fn new(classifier: C, label_table: LabelTable, llm_client: Option<L>) -> Self {
        Self {
            classifier: Arc::new(classifier),
            label_table: Arc::new(label_table),
            llm_client: llm_client.map(Arc::new),
        }
    }
}

impl<C, L> Clone for Service<C, L> {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            label_table: self.label_table.clone(),
            llm_client: self.llm_client.clone(),
        }
    }
}

pub type FoodLensService = Service<TractClassifier, GeminiLlmClient>;

/// Loads the classifier and the label table and wires the optional Gemini
/// client from the process configuration.
pub fn create_service(config: FoodLensConfig) -> Result<FoodLensService, CoreError> {
    let classifier = TractClassifier::load(&config.model.model_path)?;

    let label_table = LabelTable::load(&config.model.class_names_path)?;
    tracing::info!(classes = label_table.len(), "loaded label table");

    let llm_client = match config.llm.gemini_api_key {
        Some(api_key) if !api_key.is_empty() => {
            Some(GeminiLlmClient::new(api_key, config.llm.gemini_model))
        }
        _ => {
            tracing::warn!("GEMINI_API_KEY is not set, enrichment is disabled");
            None
        }
    };

    Ok(Service::new(classifier, label_table, llm_client))
}
