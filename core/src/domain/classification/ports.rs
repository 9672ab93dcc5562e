use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// A loaded, ready-to-run image classification model.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Runs the model on a preprocessed `[1, 224, 224, 3]` input tensor and
    /// returns the output score vector with singleton dimensions removed.
    fn scores(&self, input: Vec<f32>)
    -> impl Future<Output = Result<Vec<f32>, CoreError>> + Send;
}
