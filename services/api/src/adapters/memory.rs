//! services/api/src/adapters/memory.rs
//!
//! The in-memory adapter, implementing both storage ports over plain vectors.
//! Nothing survives a restart. One instance is built in `main` and shared by
//! every handler through `AppState`.

use async_trait::async_trait;
use study_planner_core::domain::{
    SessionPatch, SessionRecord, StoredPlan, StudyPlan, SubjectRecord,
};
use study_planner_core::ports::{PlanStore, PortError, PortResult, SubjectStore};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Default)]
pub struct InMemoryStore {
    subjects: RwLock<Vec<SubjectRecord>>,
    plans: RwLock<Vec<StoredPlan>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubjectStore for InMemoryStore {
    async fn add_subject(&self, subject: SubjectRecord) -> PortResult<SubjectRecord> {
        self.subjects.write().await.push(subject.clone());
        info!(subject_id = subject.id(), "Stored subject");
        Ok(subject)
    }

    async fn list_subjects(&self) -> PortResult<Vec<SubjectRecord>> {
        Ok(self.subjects.read().await.clone())
    }

    async fn delete_subject(&self, subject_id: &str) -> PortResult<usize> {
        let mut subjects = self.subjects.write().await;
        let before = subjects.len();
        subjects.retain(|s| s.id() != subject_id);
        let removed = before - subjects.len();
        if removed == 0 {
            return Err(PortError::NotFound("Subject not found".to_string()));
        }
        info!(subject_id, removed, "Deleted subject");
        Ok(removed)
    }
}

#[async_trait]
impl PlanStore for InMemoryStore {
    async fn save_plan(&self, plan: StudyPlan) -> PortResult<StoredPlan> {
        let plan = StoredPlan::from(plan);
        let mut plans = self.plans.write().await;
        plans.push(plan.clone());
        info!(
            plan_index = plans.len() - 1,
            sessions = plan.sessions.len(),
            "Stored study plan"
        );
        Ok(plan)
    }

    async fn list_plans(&self) -> PortResult<Vec<StoredPlan>> {
        Ok(self.plans.read().await.clone())
    }

    async fn update_session(
        &self,
        session_id: &str,
        patch: &SessionPatch,
    ) -> PortResult<SessionRecord> {
        let mut plans = self.plans.write().await;
        let session = plans
            .iter_mut()
            .flat_map(|plan| plan.sessions.iter_mut())
            .find(|session| session.has_id(session_id))
            .ok_or_else(|| PortError::NotFound("Session not found".to_string()))?;

        session.apply_patch(patch);
        debug!(session_id, fields = patch.len(), "Patched study session");
        Ok(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use study_planner_core::planner::{generate_plan, PlanRequest};

    fn subject(id: &str, name: &str) -> SubjectRecord {
        SubjectRecord::from_value(json!({ "id": id, "name": name, "chapters": [] })).unwrap()
    }

    fn plan() -> StudyPlan {
        let request: PlanRequest = serde_json::from_value(json!({
            "subjects": [{ "id": "s1", "chapters": [
                { "id": "c1", "estimatedHours": 1 },
                { "id": "c2", "estimatedHours": 1 }
            ]}],
            "availableTimes": [
                { "day": "Monday", "hours": 2 },
                { "day": "Tuesday", "hours": 2 }
            ],
            "startDate": "2024-01-01",
            "endDate": "2024-01-07"
        }))
        .unwrap();
        generate_plan(&request).unwrap()
    }

    fn completed() -> SessionPatch {
        match json!({ "completed": true }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn delete_removes_every_subject_with_the_id() {
        let store = InMemoryStore::new();
        store.add_subject(subject("dup", "first")).await.unwrap();
        store.add_subject(subject("keep", "other")).await.unwrap();
        store.add_subject(subject("dup", "second")).await.unwrap();

        assert_eq!(store.delete_subject("dup").await.unwrap(), 2);
        let remaining = store.list_subjects().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), "keep");
    }

    #[tokio::test]
    async fn deleting_an_unknown_subject_changes_nothing() {
        let store = InMemoryStore::new();
        store.add_subject(subject("s1", "Physics")).await.unwrap();

        let err = store.delete_subject("nope").await.unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
        assert_eq!(store.list_subjects().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn colliding_session_ids_patch_the_oldest_plan() {
        let store = InMemoryStore::new();
        store.save_plan(plan()).await.unwrap();
        store.save_plan(plan()).await.unwrap();

        let updated = store.update_session("session_1", &completed()).await.unwrap();
        assert_eq!(updated.get("completed"), Some(&json!(true)));

        let plans = store.list_plans().await.unwrap();
        assert_eq!(plans[0].sessions[1].get("completed"), Some(&json!(true)));
        assert_eq!(plans[1].sessions[1].get("completed"), Some(&json!(false)));
    }

    #[tokio::test]
    async fn updates_are_visible_to_later_reads() {
        let store = InMemoryStore::new();
        store.save_plan(plan()).await.unwrap();
        for id in ["session_0", "session_1"] {
            store.update_session(id, &completed()).await.unwrap();
        }

        let plans = store.list_plans().await.unwrap();
        assert!(plans[0]
            .sessions
            .iter()
            .all(|s| s.get("completed") == Some(&json!(true))));
    }

    #[tokio::test]
    async fn patches_are_stored_without_type_checks() {
        let store = InMemoryStore::new();
        store.save_plan(plan()).await.unwrap();
        let patch = match json!({ "duration": "1h", "completed": null }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };

        let updated = store.update_session("session_0", &patch).await.unwrap();
        assert_eq!(updated.get("duration"), Some(&json!("1h")));
        assert_eq!(updated.get("completed"), Some(&serde_json::Value::Null));

        let plans = store.list_plans().await.unwrap();
        assert_eq!(plans[0].sessions[0], updated);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = InMemoryStore::new();
        store.save_plan(plan()).await.unwrap();
        let err = store.update_session("session_9", &completed()).await.unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
    }
}
