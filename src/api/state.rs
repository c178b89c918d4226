use std::sync::Arc;

use crate::data::ModelContext;

/// Shared application state
///
/// The model is read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelContext>,
    /// Count used when a recommendation request omits one
    pub default_count: usize,
}

impl AppState {
    /// Creates state around a loaded model
    pub fn new(model: ModelContext, default_count: usize) -> Self {
        Self {
            model: Arc::new(model),
            default_count,
        }
    }
}
