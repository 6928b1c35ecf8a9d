//! crates/study_planner_core/src/domain.rs
//!
//! Defines the core data structures of the study planner.
//!
//! The planner reads typed inputs (`Subject`, `Chapter`, `AvailableTime`) and
//! emits typed `StudySession`s. What gets stored is looser: subjects are kept
//! exactly as the client posted them, and a saved session is a plain JSON
//! object so later patches can assign any value to any key.

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use utoipa::ToSchema;

/// Key-by-key field assignments applied to a stored session.
pub type SessionPatch = Map<String, Value>;

/// A unit of study inside a subject.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    #[schema(value_type = f64)]
    pub estimated_hours: Number,
}

/// The parts of a subject the planner reads. Anything else the client
/// sends along is ignored here.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct Subject {
    pub id: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Hours available on a named weekday, e.g. `{"day": "Monday", "hours": 2}`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct AvailableTime {
    pub day: String,
    #[schema(value_type = f64)]
    pub hours: Number,
}

/// A subject as posted by the client. Only a string `id` is required; every
/// other key is stored and echoed untouched.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct SubjectRecord(Map<String, Value>);

impl SubjectRecord {
    /// Accepts any JSON object whose `id` is a string.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(fields) = value else {
            return Err("Subject must be a JSON object".to_string());
        };
        match fields.get("id") {
            Some(Value::String(_)) => Ok(Self(fields)),
            _ => Err("Subject requires a string id".to_string()),
        }
    }

    pub fn id(&self) -> &str {
        self.0.get("id").and_then(Value::as_str).unwrap_or_default()
    }
}

/// One scheduled block of study for a single chapter on a single date, as
/// produced by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    /// `session_<n>`, unique only within the plan that produced it.
    pub id: String,
    #[schema(value_type = String, format = DateTime)]
    pub date: Timestamp,
    pub subject_id: String,
    pub chapter_id: String,
    #[schema(value_type = f64)]
    pub duration: Number,
    pub completed: bool,
}

/// A generated schedule for one date range.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub sessions: Vec<StudySession>,
    #[schema(value_type = String, format = DateTime)]
    pub start_date: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_date: Timestamp,
}

/// A stored session: the generated session's JSON object, open to patching.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct SessionRecord(Map<String, Value>);

impl SessionRecord {
    /// Matches only while `id` is still a string equal to `session_id`.
    pub fn has_id(&self, session_id: &str) -> bool {
        self.0.get("id").and_then(Value::as_str) == Some(session_id)
    }

    /// Assigns every key of `patch`, whatever its type.
    pub fn apply_patch(&mut self, patch: &SessionPatch) {
        for (key, value) in patch {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<&StudySession> for SessionRecord {
    fn from(session: &StudySession) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(session.id.clone()));
        fields.insert("date".to_string(), Value::String(session.date.to_string()));
        fields.insert(
            "subjectId".to_string(),
            Value::String(session.subject_id.clone()),
        );
        fields.insert(
            "chapterId".to_string(),
            Value::String(session.chapter_id.clone()),
        );
        fields.insert("duration".to_string(), Value::Number(session.duration.clone()));
        fields.insert("completed".to_string(), Value::Bool(session.completed));
        Self(fields)
    }
}

/// A plan as kept by the plan store.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlan {
    pub sessions: Vec<SessionRecord>,
    #[schema(value_type = String, format = DateTime)]
    pub start_date: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_date: Timestamp,
}

impl From<StudyPlan> for StoredPlan {
    fn from(plan: StudyPlan) -> Self {
        Self {
            sessions: plan.sessions.iter().map(SessionRecord::from).collect(),
            start_date: plan.start_date,
            end_date: plan.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> SessionRecord {
        SessionRecord::from(&StudySession {
            id: "session_0".to_string(),
            date: Timestamp::parse("2024-01-01").unwrap(),
            subject_id: "s1".to_string(),
            chapter_id: "c1".to_string(),
            duration: Number::from(2),
            completed: false,
        })
    }

    fn patch(value: Value) -> SessionPatch {
        match value {
            Value::Object(map) => map,
            _ => panic!("patch must be an object"),
        }
    }

    #[test]
    fn record_matches_the_session_json() {
        assert_eq!(
            serde_json::to_value(record()).unwrap(),
            json!({
                "id": "session_0",
                "date": "2024-01-01T00:00:00",
                "subjectId": "s1",
                "chapterId": "c1",
                "duration": 2,
                "completed": false
            })
        );
    }

    #[test]
    fn patch_changes_only_named_fields() {
        let mut s = record();
        s.apply_patch(&patch(json!({ "completed": true })));
        let mut expected = serde_json::to_value(record()).unwrap();
        expected["completed"] = json!(true);
        assert_eq!(serde_json::to_value(&s).unwrap(), expected);
    }

    #[test]
    fn patch_stores_values_of_any_type_verbatim() {
        let mut s = record();
        s.apply_patch(&patch(json!({
            "duration": "1h",
            "completed": null,
            "date": "2024-02-01T00:00:00.000Z",
            "notes": ["skimmed"]
        })));
        assert_eq!(s.get("duration"), Some(&json!("1h")));
        assert_eq!(s.get("completed"), Some(&Value::Null));
        assert_eq!(s.get("date"), Some(&json!("2024-02-01T00:00:00.000Z")));
        assert_eq!(s.get("notes"), Some(&json!(["skimmed"])));
    }

    #[test]
    fn non_string_id_no_longer_matches() {
        let mut s = record();
        assert!(s.has_id("session_0"));
        s.apply_patch(&patch(json!({ "id": 7 })));
        assert!(!s.has_id("session_0"));
        assert!(!s.has_id("7"));
    }

    #[test]
    fn subject_record_keeps_exactly_what_was_sent() {
        let raw = json!({ "id": "s2", "chapters": null, "color": "#3B82F6" });
        let subject = SubjectRecord::from_value(raw.clone()).unwrap();
        assert_eq!(subject.id(), "s2");
        assert_eq!(serde_json::to_value(&subject).unwrap(), raw);
    }

    #[test]
    fn subject_record_needs_a_string_id() {
        assert!(SubjectRecord::from_value(json!({ "name": "Nameless" })).is_err());
        assert!(SubjectRecord::from_value(json!({ "id": 3 })).is_err());
        assert!(SubjectRecord::from_value(json!(["s1"])).is_err());
    }
}
