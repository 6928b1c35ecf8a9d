//! crates/study_planner_core/src/planner.rs
//!
//! Turns subjects and weekly availability into a day-by-day study plan.
//!
//! The walk is greedy and single-pass: one calendar cursor is shared by every
//! chapter of every subject, and each chapter consumes exactly one day of it.
//! A chapter whose estimate exceeds that day's hours is truncated to the
//! available hours rather than spread over several days.

use crate::domain::{AvailableTime, StudyPlan, StudySession, Subject};
use crate::timestamp::{Timestamp, TimestampError};
use serde::Deserialize;
use serde_json::Number;
use utoipa::ToSchema;

/// The body of a plan generation request. Every field is optional on the
/// wire so that missing data can be reported as a validation failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub subjects: Option<Vec<Subject>>,
    #[serde(default)]
    pub available_times: Option<Vec<AvailableTime>>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Missing required data")]
    MissingData,
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Validates the request, parses its dates, and schedules it.
///
/// Presence is checked before any parsing: an absent or empty `subjects`,
/// `startDate` or `endDate` is `MissingData`, while a present but malformed
/// date is a timestamp error.
pub fn generate_plan(request: &PlanRequest) -> Result<StudyPlan, PlanError> {
    let subjects = request
        .subjects
        .as_deref()
        .filter(|subjects| !subjects.is_empty())
        .ok_or(PlanError::MissingData)?;
    let start_date = required(&request.start_date)?;
    let end_date = required(&request.end_date)?;

    let start = Timestamp::parse(start_date)?;
    let end = Timestamp::parse(end_date)?;
    let available_times = request.available_times.as_deref().unwrap_or(&[]);

    schedule(subjects, available_times, start, end)
}

fn required(field: &Option<String>) -> Result<&str, PlanError> {
    field
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(PlanError::MissingData)
}

/// Hours for the first entry naming `day`; 0 when no entry does.
pub fn hours_on(available_times: &[AvailableTime], day: &str) -> Number {
    available_times
        .iter()
        .find(|time| time.day == day)
        .map(|time| time.hours.clone())
        .unwrap_or_else(|| Number::from(0))
}

fn as_hours(number: &Number) -> f64 {
    number.as_f64().unwrap_or(0.0)
}

/// The smaller of the two, keeping the estimate on a tie. The winner is
/// returned as sent, so two integers give an integer.
fn session_length(estimate: &Number, available: &Number) -> Number {
    if as_hours(available) < as_hours(estimate) {
        available.clone()
    } else {
        estimate.clone()
    }
}

/// Walks subjects then chapters in input order with a shared day cursor.
///
/// Once the cursor passes `end`, the remaining chapters of the current
/// subject are skipped; later subjects still get a look, but the cursor
/// never moves back so they are skipped too.
pub fn schedule(
    subjects: &[Subject],
    available_times: &[AvailableTime],
    start: Timestamp,
    end: Timestamp,
) -> Result<StudyPlan, PlanError> {
    let mut sessions: Vec<StudySession> = Vec::new();
    let mut cursor = start;

    for subject in subjects {
        for chapter in &subject.chapters {
            if cursor.is_after(&end)? {
                break;
            }

            let hours = hours_on(available_times, cursor.weekday_name());
            if as_hours(&hours) > 0.0 {
                sessions.push(StudySession {
                    id: format!("session_{}", sessions.len()),
                    date: cursor,
                    subject_id: subject.id.clone(),
                    chapter_id: chapter.id.clone(),
                    duration: session_length(&chapter.estimated_hours, &hours),
                    completed: false,
                });
            }

            cursor = cursor.next_day()?;
        }
    }

    Ok(StudyPlan {
        sessions,
        start_date: start,
        end_date: end,
    })
}
