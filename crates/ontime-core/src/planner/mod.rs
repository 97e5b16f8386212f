//! Pure commands over [`PlannerState`](crate::state::PlannerState).
//!
//! Every command validates its whole input before it mutates anything, so an
//! `Err` always leaves the state untouched. On success it returns the
//! [`Change`](crate::state::Change) the caller needs to persist and redraw.

pub mod backup;
pub mod schedule;
pub mod settings;
pub mod subjects;
pub mod tasks;

pub use backup::{export_document, import_document, parse_export, reset};
pub use schedule::{NewSession, create_session, delete_session, sessions_for_date};
pub use settings::{SettingsUpdate, SettingsUpdateBuilder, toggle_theme, update_settings};
pub use subjects::{NewSubject, SubjectUpdate, create_subject, delete_subject, update_subject};
pub use tasks::{
    NewTask, TaskFilter, create_task, delete_task, list_tasks, set_task_status, toggle_task,
};
