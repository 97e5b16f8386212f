//! Cross-cutting error types for OnTime.
//!
//! Every command validates its input completely before touching state, so any
//! error returned here leaves the `PlannerState` exactly as it was. Storage
//! errors are defined in `ontime-store`; `anyhow` takes over in `ontime-cli`.

use thiserror::Error;

use crate::enums::Severity;

/// A user input that a command refused. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a subject name")]
    EmptySubjectName,

    #[error("Please enter a task title")]
    EmptyTaskTitle,

    #[error("Add a subject first before scheduling")]
    NoSubjects,

    #[error("Hour {hour} is outside the schedulable range {min}-{max}")]
    HourOutOfRange { hour: u8, min: u8, max: u8 },

    #[error("End time must be after start time (start {start}, end {end})")]
    EndNotAfterStart { start: u8, end: u8 },

    #[error("Time conflict with existing session {existing_id} ({start}-{end})")]
    Conflict {
        existing_id: String,
        start: u8,
        end: u8,
    },

    #[error("Accent color cannot be empty")]
    EmptyAccent,
}

impl ValidationError {
    /// Notification severity for this rejection. Scheduling before any
    /// subject exists is a nudge, everything else is an error.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::NoSubjects => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Errors that can be raised by any OnTime crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation; nothing was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An imported document could not be accepted.
    #[error("Import rejected: {0}")]
    Import(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Short machine-readable code used by the IPC channel.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation(_) => "validation",
            Self::Import(_) => "import_rejected",
            Self::Other(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_severities() {
        let err = CoreError::from(ValidationError::NoSubjects);
        assert_eq!(err.code(), "validation");
        assert_eq!(ValidationError::NoSubjects.severity(), Severity::Warning);
        assert_eq!(ValidationError::EmptyTaskTitle.severity(), Severity::Error);
        assert_eq!(CoreError::not_found("task", "tsk-1").code(), "not_found");
        assert_eq!(
            CoreError::not_found("task", "tsk-1").to_string(),
            "Entity not found: task tsk-1"
        );
    }
}
