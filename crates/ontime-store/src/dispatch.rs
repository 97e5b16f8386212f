//! Command values and their execution against a `Planner`.
//!
//! Method names follow the `<area>.<verb>` form used on the IPC channel:
//!
//! | method                 | params                                  |
//! |------------------------|-----------------------------------------|
//! | `subject.list`         | none                                    |
//! | `subject.create`       | `NewSubject`                            |
//! | `subject.update`       | `SubjectUpdate`                         |
//! | `subject.delete`       | `{id}`                                  |
//! | `session.list`         | `{date?}`                               |
//! | `session.create`       | `NewSession`                            |
//! | `session.delete`       | `{id}`                                  |
//! | `task.list`            | `TaskFilter`                            |
//! | `task.create`          | `NewTask`                               |
//! | `task.delete`          | `{id}`                                  |
//! | `task.setStatus`       | `{id, status}`                          |
//! | `task.toggle`          | `{id}`                                  |
//! | `settings.get`         | none                                    |
//! | `settings.update`      | `SettingsUpdate`                        |
//! | `settings.toggleTheme` | none                                    |
//! | `dashboard`            | none                                    |
//! | `analytics`            | none                                    |
//! | `data.export`          | none                                    |
//! | `data.import`          | the backup document                     |
//! | `data.reset`           | none                                    |

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use ontime_core::enums::{EntityKind, TaskStatus};
use ontime_core::errors::CoreError;
use ontime_core::planner::{
    NewSession, NewSubject, NewTask, SettingsUpdate, SubjectUpdate, TaskFilter,
};
use ontime_core::state::Change;

use crate::service::Planner;

/// A request that never reached the planner.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    #[error("bad params for {method}: {reason}")]
    BadParams { method: String, reason: String },
}

impl DispatchError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownMethod(_) => "unknown_method",
            Self::BadParams { .. } => "bad_params",
        }
    }
}

/// Every user intent the planner understands.
#[derive(Debug, Clone)]
pub enum Command {
    SubjectList,
    SubjectCreate(NewSubject),
    SubjectUpdate(SubjectUpdate),
    SubjectDelete { id: String },
    SessionList { date: Option<NaiveDate> },
    SessionCreate(NewSession),
    SessionDelete { id: String },
    TaskList(TaskFilter),
    TaskCreate(NewTask),
    TaskDelete { id: String },
    TaskSetStatus { id: String, status: TaskStatus },
    TaskToggle { id: String },
    SettingsGet,
    SettingsUpdate(SettingsUpdate),
    SettingsToggleTheme,
    Dashboard,
    Analytics,
    DataExport,
    DataImport(Value),
    DataReset,
}

#[derive(Deserialize)]
struct IdParams {
    id: String,
}

#[derive(Deserialize)]
struct DateParams {
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct StatusParams {
    id: String,
    status: TaskStatus,
}

fn params<T: DeserializeOwned>(method: &str, raw: &Value) -> Result<T, DispatchError> {
    let raw = if raw.is_null() { json!({}) } else { raw.clone() };
    serde_json::from_value(raw).map_err(|e| DispatchError::BadParams {
        method: method.to_string(),
        reason: e.to_string(),
    })
}

impl Command {
    /// Build a command from an IPC method name and its params.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownMethod` for an unrecognised method and
    /// `DispatchError::BadParams` when the params do not fit it.
    pub fn parse(method: &str, raw: &Value) -> Result<Self, DispatchError> {
        let command = match method {
            "subject.list" => Self::SubjectList,
            "subject.create" => Self::SubjectCreate(params(method, raw)?),
            "subject.update" => Self::SubjectUpdate(params(method, raw)?),
            "subject.delete" => Self::SubjectDelete {
                id: params::<IdParams>(method, raw)?.id,
            },
            "session.list" => Self::SessionList {
                date: params::<DateParams>(method, raw)?.date,
            },
            "session.create" => Self::SessionCreate(params(method, raw)?),
            "session.delete" => Self::SessionDelete {
                id: params::<IdParams>(method, raw)?.id,
            },
            "task.list" => Self::TaskList(params(method, raw)?),
            "task.create" => Self::TaskCreate(params(method, raw)?),
            "task.delete" => Self::TaskDelete {
                id: params::<IdParams>(method, raw)?.id,
            },
            "task.setStatus" => {
                let StatusParams { id, status } = params(method, raw)?;
                Self::TaskSetStatus { id, status }
            }
            "task.toggle" => Self::TaskToggle {
                id: params::<IdParams>(method, raw)?.id,
            },
            "settings.get" => Self::SettingsGet,
            "settings.update" => Self::SettingsUpdate(params(method, raw)?),
            "settings.toggleTheme" => Self::SettingsToggleTheme,
            "dashboard" => Self::Dashboard,
            "analytics" => Self::Analytics,
            "data.export" => Self::DataExport,
            "data.import" => Self::DataImport(raw.clone()),
            "data.reset" => Self::DataReset,
            other => return Err(DispatchError::UnknownMethod(other.to_string())),
        };
        Ok(command)
    }

    /// The IPC method name for this command.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::SubjectList => "subject.list",
            Self::SubjectCreate(_) => "subject.create",
            Self::SubjectUpdate(_) => "subject.update",
            Self::SubjectDelete { .. } => "subject.delete",
            Self::SessionList { .. } => "session.list",
            Self::SessionCreate(_) => "session.create",
            Self::SessionDelete { .. } => "session.delete",
            Self::TaskList(_) => "task.list",
            Self::TaskCreate(_) => "task.create",
            Self::TaskDelete { .. } => "task.delete",
            Self::TaskSetStatus { .. } => "task.setStatus",
            Self::TaskToggle { .. } => "task.toggle",
            Self::SettingsGet => "settings.get",
            Self::SettingsUpdate(_) => "settings.update",
            Self::SettingsToggleTheme => "settings.toggleTheme",
            Self::Dashboard => "dashboard",
            Self::Analytics => "analytics",
            Self::DataExport => "data.export",
            Self::DataImport(_) => "data.import",
            Self::DataReset => "data.reset",
        }
    }
}

/// What a command produced: the change it made (if any) and its JSON result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Change>,
    pub result: Value,
}

impl Outcome {
    const fn read(result: Value) -> Self {
        Self {
            change: None,
            result,
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, CoreError> {
    serde_json::to_value(value).map_err(|e| CoreError::Other(e.into()))
}

impl Planner {
    /// Run one command to completion.
    ///
    /// Mutations return the affected record as their result (`null` once
    /// deleted); queries return their view.
    ///
    /// # Errors
    ///
    /// Returns the `CoreError` of the underlying operation; the state is
    /// unchanged in that case.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CoreError> {
        tracing::debug!(method = command.method(), "executing command");
        let change = match command {
            Command::SubjectList => return Ok(Outcome::read(to_json(self.subjects())?)),
            Command::SessionList { date } => {
                return Ok(Outcome::read(to_json(&self.day_schedule(date))?));
            }
            Command::TaskList(filter) => return Ok(Outcome::read(to_json(&self.tasks(&filter))?)),
            Command::SettingsGet => return Ok(Outcome::read(to_json(self.settings())?)),
            Command::Dashboard => return Ok(Outcome::read(to_json(&self.dashboard())?)),
            Command::Analytics => return Ok(Outcome::read(to_json(&self.analytics())?)),
            Command::DataExport => return Ok(Outcome::read(to_json(&self.export())?)),

            Command::SubjectCreate(input) => self.create_subject(input)?,
            Command::SubjectUpdate(input) => self.update_subject(input)?,
            Command::SubjectDelete { id } => self.delete_subject(&id)?,
            Command::SessionCreate(input) => self.create_session(input)?,
            Command::SessionDelete { id } => self.delete_session(&id)?,
            Command::TaskCreate(input) => self.create_task(input)?,
            Command::TaskDelete { id } => self.delete_task(&id)?,
            Command::TaskSetStatus { id, status } => self.set_task_status(&id, status)?,
            Command::TaskToggle { id } => self.toggle_task(&id)?,
            Command::SettingsUpdate(update) => self.update_settings(update)?,
            Command::SettingsToggleTheme => self.toggle_theme()?,
            Command::DataImport(document) => self.import(document)?,
            Command::DataReset => self.reset()?,
        };

        let result = self.changed_record(&change)?;
        Ok(Outcome {
            change: Some(change),
            result,
        })
    }

    /// The record a change touched, as JSON.
    fn changed_record(&self, change: &Change) -> Result<Value, CoreError> {
        let state = self.state();
        let id = change.id.as_deref().unwrap_or_default();
        match change.entity {
            EntityKind::Subject => state.subject(id).map_or(Ok(Value::Null), to_json),
            EntityKind::Task => state.task(id).map_or(Ok(Value::Null), to_json),
            EntityKind::Session => state.session(id).map_or(Ok(Value::Null), to_json),
            EntityKind::Settings => to_json(&state.settings),
            EntityKind::All => Ok(json!({
                "subjects": state.subjects.len(),
                "tasks": state.tasks.len(),
                "schedule": state.schedule.len(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontime_core::enums::ChangeAction;
    use pretty_assertions::assert_eq;

    use crate::kv::MemoryStore;
    use crate::test_support::helpers::{planner_with, today};

    #[test]
    fn parses_every_listed_method() {
        let cases = [
            ("subject.list", Value::Null),
            ("subject.create", json!({"name": "Biology"})),
            ("subject.update", json!({"id": "sub-1", "name": "Bio"})),
            ("subject.delete", json!({"id": "sub-1"})),
            ("session.list", json!({"date": "2026-10-18"})),
            ("session.create", json!({"subjectId": "sub-1", "startHour": 9, "endHour": 10})),
            ("session.delete", json!({"id": "ses-1"})),
            ("task.list", json!({"status": "pending"})),
            ("task.create", json!({"title": "Essay"})),
            ("task.delete", json!({"id": "tsk-1"})),
            ("task.setStatus", json!({"id": "tsk-1", "status": "in-progress"})),
            ("task.toggle", json!({"id": "tsk-1"})),
            ("settings.get", Value::Null),
            ("settings.update", json!({"accent": "rose"})),
            ("settings.toggleTheme", Value::Null),
            ("dashboard", Value::Null),
            ("analytics", Value::Null),
            ("data.export", Value::Null),
            ("data.import", json!({})),
            ("data.reset", Value::Null),
        ];
        for (method, raw) in cases {
            let command = Command::parse(method, &raw).unwrap();
            assert_eq!(command.method(), method);
        }
    }

    #[test]
    fn rejects_unknown_methods_and_bad_params() {
        let err = Command::parse("task.fly", &Value::Null).unwrap_err();
        assert_eq!(err.code(), "unknown_method");

        let err = Command::parse("task.delete", &json!({"task": 1})).unwrap_err();
        assert_eq!(err.code(), "bad_params");

        let err = Command::parse("task.setStatus", &json!({"id": "x", "status": "done"})).unwrap_err();
        assert_eq!(err.code(), "bad_params");
    }

    #[test]
    fn null_params_default_the_filter() {
        let Command::TaskList(filter) = Command::parse("task.list", &Value::Null).unwrap() else {
            panic!("expected task.list");
        };
        assert_eq!(filter, TaskFilter::default());
    }

    #[test]
    fn mutations_return_change_and_record() {
        let mut planner = planner_with(MemoryStore::new());
        let outcome = planner
            .execute(Command::parse("subject.create", &json!({"name": "Biology"})).unwrap())
            .unwrap();

        let change = outcome.change.unwrap();
        assert_eq!(change.action, ChangeAction::Created);
        assert_eq!(outcome.result["name"], "Biology");
        assert_eq!(outcome.result["id"], json!(change.id.clone().unwrap()));

        let outcome = planner
            .execute(Command::SubjectDelete {
                id: change.id.unwrap(),
            })
            .unwrap();
        assert_eq!(outcome.result, Value::Null);
    }

    #[test]
    fn queries_have_no_change() {
        let mut planner = planner_with(MemoryStore::new());
        let outcome = planner.execute(Command::Dashboard).unwrap();
        assert!(outcome.change.is_none());
        assert_eq!(outcome.result["today"], json!(today()));
    }

    #[test]
    fn failures_leave_state_untouched() {
        let mut planner = planner_with(MemoryStore::new());
        let err = planner
            .execute(Command::TaskCreate(NewTask::default()))
            .unwrap_err();
        assert_eq!(err.code(), "validation");
        assert!(planner.state().tasks.is_empty());
    }
}
