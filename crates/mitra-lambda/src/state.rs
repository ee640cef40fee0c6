use std::sync::Arc;

use mitra_guidelines::GuidelineTable;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<GuidelineTable>,
}

impl AppState {
    pub fn new(table: Arc<GuidelineTable>) -> Self {
        Self { table }
    }
}
