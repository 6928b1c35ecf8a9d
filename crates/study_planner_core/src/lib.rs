pub mod domain;
pub mod planner;
pub mod ports;
pub mod timestamp;

pub use domain::{
    AvailableTime, Chapter, SessionPatch, SessionRecord, StoredPlan, StudyPlan, StudySession,
    Subject, SubjectRecord,
};
pub use planner::{generate_plan, PlanError, PlanRequest};
pub use ports::{PlanStore, PortError, PortResult, SubjectStore};
pub use timestamp::{Timestamp, TimestampError};
