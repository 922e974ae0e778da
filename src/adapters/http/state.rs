//! Shared application state for the gateway.

use std::sync::Arc;

use crate::ports::ViabilityScorer;

/// State injected into every axum handler.
pub struct AppState {
    /// The scoring engine behind its port. Pure and stateless, so a single
    /// instance serves all requests without coordination.
    pub scorer: Arc<dyn ViabilityScorer>,
}

impl AppState {
    #[must_use]
    pub fn new(scorer: Arc<dyn ViabilityScorer>) -> Self {
        Self { scorer }
    }
}

pub type SharedState = Arc<AppState>;
