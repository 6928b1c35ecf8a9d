//! crates/study_planner_core/src/ports.rs
//!
//! Defines the storage contracts (traits) for the study planner.
//! The HTTP layer only talks to these traits, so the in-memory store can be
//! swapped for a persistent one without touching the handlers.

use crate::domain::{SessionPatch, SessionRecord, StoredPlan, StudyPlan, SubjectRecord};
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("{0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Storage Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait SubjectStore: Send + Sync {
    /// Appends the subject exactly as given and returns it.
    async fn add_subject(&self, subject: SubjectRecord) -> PortResult<SubjectRecord>;

    /// All subjects in insertion order.
    async fn list_subjects(&self) -> PortResult<Vec<SubjectRecord>>;

    /// Removes every subject with this id and returns how many went.
    /// Fails with `NotFound` when nothing matched.
    async fn delete_subject(&self, subject_id: &str) -> PortResult<usize>;
}

#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Turns the generated sessions into patchable records and appends the plan.
    async fn save_plan(&self, plan: StudyPlan) -> PortResult<StoredPlan>;

    async fn list_plans(&self) -> PortResult<Vec<StoredPlan>>;

    /// Patches the first session with this id, scanning plans in insertion
    /// order. Session ids repeat across plans, so later duplicates are never
    /// reached.
    async fn update_session(
        &self,
        session_id: &str,
        patch: &SessionPatch,
    ) -> PortResult<SessionRecord>;
}
