//! services/api/src/web/state.rs
//!
//! Defines the application state shared by every request handler.

use crate::adapters::InMemoryStore;
use study_planner_core::ports::{PlanStore, SubjectStore};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub subjects: Arc<dyn SubjectStore>,
    pub plans: Arc<dyn PlanStore>,
}

impl AppState {
    /// Backs both ports with a single fresh `InMemoryStore`.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            subjects: store.clone(),
            plans: store,
        }
    }
}
