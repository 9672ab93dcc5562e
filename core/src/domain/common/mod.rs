use std::path::PathBuf;

pub mod entities;

#[derive(Clone, Debug)]
pub struct FoodLensConfig {
    pub model: ModelConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub model_path: PathBuf,
    pub class_names_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}
