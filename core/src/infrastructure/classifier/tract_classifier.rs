use std::path::Path;
use std::sync::Arc;

use tract_onnx::prelude::*;

use crate::domain::classification::ports::Classifier;
use crate::domain::classification::{INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
use crate::domain::common::entities::app_errors::CoreError;

/// Classifier backed by a tract-onnx execution plan.
///
/// The optimized plan is immutable and allocates its execution state inside
/// each `run` call, so a single instance can serve concurrent requests
/// without a lock.
#[derive(Clone)]
pub struct TractClassifier {
    plan: Arc<TypedSimplePlan<TypedModel>>,
}

impl TractClassifier {
    /// Loads the ONNX model file and pins its input to the classifier's
    /// `[1, 224, 224, 3]` f32 shape.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let input_shape = tvec!(
            1,
            INPUT_HEIGHT as usize,
            INPUT_WIDTH as usize,
            INPUT_CHANNELS
        );

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), input_shape))
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| {
                CoreError::ModelError(format!("failed to load model {}: {}", path.display(), e))
            })?;

        tracing::info!(model = %path.display(), "loaded classifier");

        Ok(Self {
            plan: Arc::new(plan),
        })
    }
}

impl Classifier for TractClassifier {
    async fn scores(&self, input: Vec<f32>) -> Result<Vec<f32>, CoreError> {
        let plan = self.plan.clone();

        // Inference is CPU-bound; keep it off the async executor.
        tokio::task::spawn_blocking(move || {
            let tensor = tract_ndarray::Array4::from_shape_vec(
                (1, INPUT_HEIGHT as usize, INPUT_WIDTH as usize, INPUT_CHANNELS),
                input,
            )
            .map_err(|e| CoreError::ModelError(e.to_string()))?
            .into_tensor();

            let outputs = plan
                .run(tvec!(tensor.into()))
                .map_err(|e| CoreError::ModelError(e.to_string()))?;

            // Iterating the view flattens any singleton dimensions around
            // the output vector.
            let scores = outputs[0]
                .to_array_view::<f32>()
                .map_err(|e| CoreError::ModelError(e.to_string()))?
                .iter()
                .copied()
                .collect();

            Ok(scores)
        })
        .await
        .map_err(|e| CoreError::ModelError(e.to_string()))?
    }
}
