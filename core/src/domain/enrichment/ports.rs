use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Client trait for the hosted generative vision model.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    /// Sends the prompt together with a JPEG-encoded image and returns the
    /// model's free-text reply.
    fn generate_with_image(
        &self,
        prompt: String,
        image_jpeg: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
