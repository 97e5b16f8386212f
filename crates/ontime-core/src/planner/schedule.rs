//! Schedule planner commands.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. at least one subject exists
//! 2. the subject id resolves
//! 3. both hours lie in the schedulable range
//! 4. `end_hour > start_hour`
//! 5. no overlap with a session on the same date

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Session;
use crate::enums::{ChangeAction, EntityKind};
use crate::errors::{CoreError, ValidationError};
use crate::hours::check_hour;
use crate::ids::{PREFIX_SESSION, generate_id};
use crate::state::{Change, PlannerState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub subject_id: String,
    pub start_hour: u8,
    pub end_hour: u8,
}

/// Sessions on `date`, ascending by start hour. Equal starts keep stored order.
#[must_use]
pub fn sessions_for_date(state: &PlannerState, date: NaiveDate) -> Vec<&Session> {
    let mut sessions: Vec<&Session> = state.schedule.iter().filter(|s| s.date == date).collect();
    sessions.sort_by_key(|s| s.start_hour);
    sessions
}

fn check_conflict(
    state: &PlannerState,
    date: NaiveDate,
    start: u8,
    end: u8,
) -> Result<(), ValidationError> {
    match state
        .schedule
        .iter()
        .find(|s| s.date == date && s.overlaps(start, end))
    {
        Some(existing) => Err(ValidationError::Conflict {
            existing_id: existing.id.clone(),
            start: existing.start_hour,
            end: existing.end_hour,
        }),
        None => Ok(()),
    }
}

/// Book a study block for `today`.
///
/// # Errors
///
/// Returns a `ValidationError` for no subjects, hours out of range, an empty
/// or inverted block, or an overlap, and `CoreError::NotFound` for an unknown
/// subject.
pub fn create_session(
    state: &mut PlannerState,
    input: NewSession,
    today: NaiveDate,
) -> Result<Change, CoreError> {
    if state.subjects.is_empty() {
        return Err(ValidationError::NoSubjects.into());
    }
    if state.subject(&input.subject_id).is_none() {
        return Err(CoreError::not_found("subject", &input.subject_id));
    }
    let start = check_hour(input.start_hour)?;
    let end = check_hour(input.end_hour)?;
    if end <= start {
        return Err(ValidationError::EndNotAfterStart { start, end }.into());
    }
    check_conflict(state, today, start, end)?;

    let id = generate_id(PREFIX_SESSION)?;
    state.schedule.push(Session {
        id: id.clone(),
        subject_id: input.subject_id,
        date: today,
        start_hour: start,
        end_hour: end,
    });
    Ok(Change::new(EntityKind::Session, ChangeAction::Created, id))
}

/// Remove a session.
///
/// # Errors
///
/// Returns `CoreError::NotFound` for an unknown id.
pub fn delete_session(state: &mut PlannerState, id: &str) -> Result<Change, CoreError> {
    let index = state
        .schedule
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| CoreError::not_found("session", id))?;

    state.schedule.remove(index);
    Ok(Change::new(EntityKind::Session, ChangeAction::Deleted, id))
}
