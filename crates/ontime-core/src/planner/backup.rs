//! Whole-state export, import and reset.

use chrono::{DateTime, Utc};

use crate::enums::{ChangeAction, EntityKind};
use crate::errors::CoreError;
use crate::responses::ExportDocument;
use crate::state::{Change, PlannerState};

/// Snapshot every collection into a backup document.
#[must_use]
pub fn export_document(state: &PlannerState, now: DateTime<Utc>) -> ExportDocument {
    ExportDocument {
        subjects: state.subjects.clone(),
        tasks: state.tasks.clone(),
        schedule: state.schedule.clone(),
        settings: state.settings.clone(),
        exported_at: now,
    }
}

/// Decode a backup document from JSON.
///
/// # Errors
///
/// Returns `CoreError::Import` when the value does not have the backup shape.
pub fn parse_export(value: serde_json::Value) -> Result<ExportDocument, CoreError> {
    serde_json::from_value(value).map_err(|e| CoreError::Import(e.to_string()))
}

/// Replace all four collections with the contents of `document`.
pub fn import_document(state: &mut PlannerState, document: ExportDocument) -> Change {
    state.subjects = document.subjects;
    state.tasks = document.tasks;
    state.schedule = document.schedule;
    state.settings = document.settings;
    Change::bulk(EntityKind::All, ChangeAction::Imported)
}

/// Clear subjects, tasks and schedule. Settings survive.
pub fn reset(state: &mut PlannerState) -> Change {
    state.subjects.clear();
    state.tasks.clear();
    state.schedule.clear();
    Change::bulk(EntityKind::All, ChangeAction::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Priority;
    use crate::planner::settings::toggle_theme;
    use crate::planner::subjects::{NewSubject, create_subject};
    use crate::planner::tasks::{NewTask, create_task};
    use pretty_assertions::assert_eq;

    fn populated() -> PlannerState {
        let mut state = PlannerState::default();
        create_subject(
            &mut state,
            NewSubject {
                name: "Biology".into(),
                priority: Priority::High,
                notes: String::new(),
            },
            Utc::now(),
        )
        .unwrap();
        create_task(
            &mut state,
            NewTask {
                title: "Lab Report".into(),
                ..NewTask::default()
            },
            Utc::now(),
        )
        .unwrap();
        toggle_theme(&mut state);
        state
    }

    #[test]
    fn export_then_import_reproduces_state() {
        let original = populated();
        let json = serde_json::to_value(export_document(&original, Utc::now())).unwrap();
        let document = parse_export(json).unwrap();

        let mut restored = PlannerState::default();
        let change = import_document(&mut restored, document);
        assert_eq!(change.action, ChangeAction::Imported);
        assert_eq!(restored, original);
    }

    #[test]
    fn reset_keeps_settings() {
        let mut state = populated();
        reset(&mut state);
        assert!(state.subjects.is_empty());
        assert!(state.tasks.is_empty());
        assert!(state.schedule.is_empty());
        assert!(state.settings.dark_mode);
    }

    #[test]
    fn malformed_backup_is_an_import_error() {
        let err = parse_export(serde_json::json!({"subjects": "nope"})).unwrap_err();
        assert!(matches!(err, CoreError::Import(_)));
        assert_eq!(err.code(), "import_rejected");
    }
}
