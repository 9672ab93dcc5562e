use std::sync::Arc;

use foodlens_core::domain::recognition::ports::FoodRecognitionService;

use crate::args::Args;

/// Shared state of the application: process arguments and the recognition
/// service, both constructed once at bootstrap.
#[derive(Clone)]
pub struct AppState<S: FoodRecognitionService> {
    pub args: Arc<Args>,
    pub service: S,
}

impl<S: FoodRecognitionService> AppState<S> {
    pub fn new(args: Arc<Args>, service: S) -> Self {
        Self { args, service }
    }
}
