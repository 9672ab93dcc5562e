use std::path::PathBuf;

use clap::Parser;
use foodlens_core::domain::common::{FoodLensConfig, LlmConfig, ModelConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodlens-api", about = "Food Recognition API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix shared by every route.
    #[arg(long, env = "ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ModelArgs {
    #[arg(
        long,
        env = "MODEL_PATH",
        default_value = "models/food101_model_quantized.onnx"
    )]
    pub model_path: PathBuf,

    #[arg(
        long,
        env = "CLASS_NAMES_PATH",
        default_value = "models/class_names.txt"
    )]
    pub class_names_path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Enrichment is disabled when the key is absent.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,
}

impl From<Args> for FoodLensConfig {
    fn from(args: Args) -> Self {
        Self {
            model: ModelConfig {
                model_path: args.model.model_path,
                class_names_path: args.model.class_names_path,
            },
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
