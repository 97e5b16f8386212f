//! The in-memory planner state and the change descriptor every command returns.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Session, Settings, Subject, Task};
use crate::enums::{ChangeAction, EntityKind};

/// All four collections, loaded once at startup and owned by one controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerState {
    pub subjects: Vec<Subject>,
    pub tasks: Vec<Task>,
    pub schedule: Vec<Session>,
    pub settings: Settings,
}

impl PlannerState {
    #[must_use]
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.schedule.iter().find(|s| s.id == id)
    }

    /// Display name for a loose subject reference.
    ///
    /// Dangling or missing references render as `"Unknown"`.
    #[must_use]
    pub fn subject_name(&self, id: Option<&str>) -> &str {
        id.and_then(|id| self.subject(id))
            .map_or(UNKNOWN_SUBJECT, |s| s.name.as_str())
    }
}

/// Placeholder shown for a subject reference that does not resolve.
pub const UNKNOWN_SUBJECT: &str = "Unknown";

/// What a successful command changed, so the caller knows what to persist and redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Change {
    pub entity: EntityKind,
    pub action: ChangeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Change {
    #[must_use]
    pub fn new(entity: EntityKind, action: ChangeAction, id: impl Into<String>) -> Self {
        Self {
            entity,
            action,
            id: Some(id.into()),
        }
    }

    /// Short confirmation shown to the user after the change.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match (self.entity, self.action) {
            (EntityKind::Subject, ChangeAction::Created) => "Subject added",
            (EntityKind::Subject, ChangeAction::Deleted) => "Subject deleted",
            (EntityKind::Subject, _) => "Subject updated",
            (EntityKind::Session, ChangeAction::Created) => "Session added",
            (EntityKind::Session, ChangeAction::Deleted) => "Session removed",
            (EntityKind::Session, _) => "Session updated",
            (EntityKind::Task, ChangeAction::Created) => "Task added",
            (EntityKind::Task, ChangeAction::Deleted) => "Task deleted",
            (EntityKind::Task, _) => "Task updated",
            (EntityKind::Settings, _) => "Settings saved",
            (EntityKind::All, ChangeAction::Reset) => "All data has been reset",
            (EntityKind::All, _) => "Data imported successfully",
        }
    }

    /// A change with no single affected record (settings, import, reset).
    #[must_use]
    pub const fn bulk(entity: EntityKind, action: ChangeAction) -> Self {
        Self {
            entity,
            action,
            id: None,
        }
    }
}
