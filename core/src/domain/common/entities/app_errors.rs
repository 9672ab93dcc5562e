use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("predicted class index {index} is out of range for {size} labels")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("model error: {0}")]
    ModelError(String),

    #[error("label table error: {0}")]
    LabelTable(String),

    #[error("internal server error")]
    InternalServerError,
}
