//! Subject registry commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Subject;
use crate::enums::{ChangeAction, EntityKind, Priority};
use crate::errors::{CoreError, ValidationError};
use crate::ids::{PREFIX_SUBJECT, generate_id};
use crate::palette::subject_color;
use crate::state::{Change, PlannerState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectUpdate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
}

fn checked_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptySubjectName);
    }
    Ok(name.to_string())
}

/// Add a subject. Its color is picked from the palette by the current count.
///
/// # Errors
///
/// Returns `ValidationError::EmptySubjectName` when the name trims to empty.
pub fn create_subject(
    state: &mut PlannerState,
    input: NewSubject,
    now: DateTime<Utc>,
) -> Result<Change, CoreError> {
    let name = checked_name(&input.name)?;
    let id = generate_id(PREFIX_SUBJECT)?;

    state.subjects.push(Subject {
        id: id.clone(),
        name,
        priority: input.priority,
        notes: input.notes.trim().to_string(),
        color: subject_color(state.subjects.len()).to_string(),
        created_at: now,
    });
    Ok(Change::new(EntityKind::Subject, ChangeAction::Created, id))
}

/// Rewrite name, priority and notes. The color is never touched.
///
/// # Errors
///
/// Returns `ValidationError::EmptySubjectName` for a blank name and
/// `CoreError::NotFound` for an unknown id.
pub fn update_subject(state: &mut PlannerState, input: SubjectUpdate) -> Result<Change, CoreError> {
    let name = checked_name(&input.name)?;
    let subject = state
        .subjects
        .iter_mut()
        .find(|s| s.id == input.id)
        .ok_or_else(|| CoreError::not_found("subject", &input.id))?;

    subject.name = name;
    subject.priority = input.priority;
    subject.notes = input.notes.trim().to_string();
    Ok(Change::new(EntityKind::Subject, ChangeAction::Updated, input.id))
}

/// Remove a subject. Tasks and sessions that reference it are left alone.
///
/// # Errors
///
/// Returns `CoreError::NotFound` for an unknown id.
pub fn delete_subject(state: &mut PlannerState, id: &str) -> Result<Change, CoreError> {
    let index = state
        .subjects
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| CoreError::not_found("subject", id))?;

    state.subjects.remove(index);
    Ok(Change::new(EntityKind::Subject, ChangeAction::Deleted, id))
}
