//! Task tracker commands and the canonical task ordering.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{ChangeAction, EntityKind, TaskStatus, TaskType};
use crate::errors::{CoreError, ValidationError};
use crate::ids::{PREFIX_TASK, generate_id};
use crate::state::{Change, PlannerState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default, deserialize_with = "crate::serde_compat::empty_string_as_none")]
    pub subject_id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_compat::optional_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "type", default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub description: String,
}

/// Optional list filters. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub subject_id: Option<String>,
}

impl TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status == status)
            && self
                .subject_id
                .as_deref()
                .is_none_or(|id| task.subject_id.as_deref() == Some(id))
    }
}

/// Tasks in display order: incomplete first, then dated ascending, then undated.
///
/// Ties keep stored order.
#[must_use]
pub fn list_tasks<'a>(state: &'a PlannerState, filter: &TaskFilter) -> Vec<&'a Task> {
    let mut tasks: Vec<&Task> = state.tasks.iter().filter(|t| filter.matches(t)).collect();
    tasks.sort_by_key(|t| (t.status.is_completed(), t.due_date.is_none(), t.due_date));
    tasks
}

/// Add a pending task.
///
/// # Errors
///
/// Returns `ValidationError::EmptyTaskTitle` when the title trims to empty.
pub fn create_task(
    state: &mut PlannerState,
    input: NewTask,
    now: DateTime<Utc>,
) -> Result<Change, CoreError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTaskTitle.into());
    }
    let id = generate_id(PREFIX_TASK)?;

    state.tasks.push(Task {
        id: id.clone(),
        title: title.to_string(),
        task_type: input.task_type,
        subject_id: input.subject_id.filter(|s| !s.trim().is_empty()),
        due_date: input.due_date,
        status: TaskStatus::Pending,
        description: input.description.trim().to_string(),
        created_at: now,
    });
    Ok(Change::new(EntityKind::Task, ChangeAction::Created, id))
}

/// Remove a task.
///
/// # Errors
///
/// Returns `CoreError::NotFound` for an unknown id.
pub fn delete_task(state: &mut PlannerState, id: &str) -> Result<Change, CoreError> {
    let index = state
        .tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| CoreError::not_found("task", id))?;

    state.tasks.remove(index);
    Ok(Change::new(EntityKind::Task, ChangeAction::Deleted, id))
}

fn task_mut<'a>(state: &'a mut PlannerState, id: &str) -> Result<&'a mut Task, CoreError> {
    state
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| CoreError::not_found("task", id))
}

/// Set any status.
///
/// # Errors
///
/// Returns `CoreError::NotFound` for an unknown id.
pub fn set_task_status(
    state: &mut PlannerState,
    id: &str,
    status: TaskStatus,
) -> Result<Change, CoreError> {
    task_mut(state, id)?.status = status;
    Ok(Change::new(EntityKind::Task, ChangeAction::StatusChanged, id))
}

/// Flip completion. In-progress tasks become completed.
///
/// # Errors
///
/// Returns `CoreError::NotFound` for an unknown id.
pub fn toggle_task(state: &mut PlannerState, id: &str) -> Result<Change, CoreError> {
    let task = task_mut(state, id)?;
    task.status = task.status.toggled();
    Ok(Change::new(EntityKind::Task, ChangeAction::StatusChanged, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn add(state: &mut PlannerState, title: &str, due: Option<NaiveDate>) -> String {
        let change = create_task(
            state,
            NewTask {
                title: title.into(),
                due_date: due,
                ..NewTask::default()
            },
            Utc::now(),
        )
        .unwrap();
        change.id.unwrap()
    }

    #[test]
    fn create_defaults_to_pending_assignment() {
        let mut state = PlannerState::default();
        add(&mut state, "  Lab Report ", None);
        let task = &state.tasks[0];
        assert_eq!(task.title, "Lab Report");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.task_type, TaskType::Assignment);
        assert_eq!(task.subject_id, None);
        assert_eq!(task.description, "");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut state = PlannerState::default();
        let err = create_task(
            &mut state,
            NewTask {
                title: "\t ".into(),
                ..NewTask::default()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyTaskTitle)
        ));
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn blank_subject_reference_is_dropped() {
        let mut state = PlannerState::default();
        create_task(
            &mut state,
            NewTask {
                title: "Essay".into(),
                subject_id: Some(String::new()),
                ..NewTask::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(state.tasks[0].subject_id, None);
    }

    #[rstest]
    #[case::pending(TaskStatus::Pending, TaskStatus::Completed)]
    #[case::in_progress(TaskStatus::InProgress, TaskStatus::Completed)]
    #[case::completed(TaskStatus::Completed, TaskStatus::Pending)]
    fn toggle_flips_completion(#[case] from: TaskStatus, #[case] to: TaskStatus) {
        let mut state = PlannerState::default();
        let id = add(&mut state, "Read", None);
        set_task_status(&mut state, &id, from).unwrap();

        let change = toggle_task(&mut state, &id).unwrap();
        assert_eq!(change.action, ChangeAction::StatusChanged);
        assert_eq!(state.tasks[0].status, to);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut state = PlannerState::default();
        assert!(matches!(
            toggle_task(&mut state, "tsk-x"),
            Err(CoreError::NotFound { .. })
        ));
        assert!(matches!(
            set_task_status(&mut state, "tsk-x", TaskStatus::Completed),
            Err(CoreError::NotFound { .. })
        ));
        assert!(matches!(
            delete_task(&mut state, "tsk-x"),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn listing_puts_incomplete_dated_first() {
        let mut state = PlannerState::default();
        let undated = add(&mut state, "undated", None);
        let late = add(&mut state, "late", Some(date(25)));
        let done = add(&mut state, "done", Some(date(1)));
        let early = add(&mut state, "early", Some(date(20)));
        let tie = add(&mut state, "tie", Some(date(20)));
        set_task_status(&mut state, &done, TaskStatus::Completed).unwrap();

        let order: Vec<&str> = list_tasks(&state, &TaskFilter::default())
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(
            order,
            vec![early.as_str(), tie.as_str(), late.as_str(), undated.as_str(), done.as_str()]
        );
    }

    #[test]
    fn filters_by_status_and_subject() {
        let mut state = PlannerState::default();
        create_task(
            &mut state,
            NewTask {
                title: "Quiz".into(),
                subject_id: Some("sub-1".into()),
                task_type: TaskType::Exam,
                ..NewTask::default()
            },
            Utc::now(),
        )
        .unwrap();
        let other = add(&mut state, "Other", None);
        set_task_status(&mut state, &other, TaskStatus::InProgress).unwrap();

        let by_subject = TaskFilter {
            subject_id: Some("sub-1".into()),
            ..TaskFilter::default()
        };
        let titles: Vec<&str> = list_tasks(&state, &by_subject)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Quiz"]);

        let by_status = TaskFilter {
            status: Some(TaskStatus::InProgress),
            ..TaskFilter::default()
        };
        assert_eq!(list_tasks(&state, &by_status)[0].id, other);
    }

    #[test]
    fn delete_keeps_other_tasks() {
        let mut state = PlannerState::default();
        let a = add(&mut state, "A", None);
        add(&mut state, "B", None);
        delete_task(&mut state, &a).unwrap();
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].title, "B");
    }
}
