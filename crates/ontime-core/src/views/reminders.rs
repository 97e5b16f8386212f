//! Deadline reminders and the per-day dedup log.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::due::{classify, days_until};
use crate::enums::Severity;
use crate::responses::Reminder;
use crate::state::PlannerState;

/// Dedup key for one task on one calendar day.
#[must_use]
pub fn reminder_marker(task_id: &str, today: NaiveDate) -> String {
    format!("reminder_{task_id}_{}", today.format("%Y-%m-%d"))
}

/// Every reminder that would fire today, ignoring what already fired.
///
/// Empty when reminders are switched off. A task qualifies when it is dated,
/// not completed, and due between today and the reminder window inclusive.
#[must_use]
pub fn reminder_candidates(state: &PlannerState, today: NaiveDate) -> Vec<Reminder> {
    if !state.settings.reminders {
        return Vec::new();
    }
    let window = i64::from(state.settings.effective_reminder_days());

    state
        .tasks
        .iter()
        .filter(|t| !t.status.is_completed())
        .filter_map(|t| t.due_date.map(|d| (t, d)))
        .filter(|(_, due)| (0..=window).contains(&days_until(*due, today)))
        .map(|(task, due)| Reminder {
            task_id: task.id.clone(),
            message: format!(
                "Reminder: {} - {}",
                task.title,
                classify(Some(due), today).label()
            ),
            severity: Severity::Warning,
            marker: reminder_marker(&task.id, today),
        })
        .collect()
}

/// Markers of reminders already shown, persisted so each fires once per day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderLog {
    markers: BTreeSet<String>,
}

impl ReminderLog {
    #[must_use]
    pub fn contains(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Drop markers that belong to any day other than `today`.
    pub fn prune(&mut self, today: NaiveDate) {
        let suffix = format!("_{}", today.format("%Y-%m-%d"));
        self.markers.retain(|m| m.ends_with(&suffix));
    }

    /// Return the reminders that have not fired yet today and record them.
    pub fn sweep(&mut self, state: &PlannerState, today: NaiveDate) -> Vec<Reminder> {
        self.prune(today);
        reminder_candidates(state, today)
            .into_iter()
            .filter(|r| self.markers.insert(r.marker.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TaskStatus;
    use crate::planner::settings::{SettingsUpdateBuilder, update_settings};
    use crate::planner::tasks::{NewTask, create_task, set_task_status};
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn add_task(state: &mut PlannerState, title: &str, offset: Option<i64>) -> String {
        create_task(
            state,
            NewTask {
                title: title.into(),
                due_date: offset.map(|d| today() + Duration::days(d)),
                ..NewTask::default()
            },
            Utc::now(),
        )
        .unwrap()
        .id
        .unwrap()
    }

    #[test]
    fn marker_format() {
        assert_eq!(
            reminder_marker("tsk-1", today()),
            "reminder_tsk-1_2026-10-18"
        );
    }

    #[test]
    fn candidates_respect_window_and_status() {
        let mut state = PlannerState::default();
        add_task(&mut state, "overdue", Some(-1));
        add_task(&mut state, "today", Some(0));
        add_task(&mut state, "edge", Some(3));
        add_task(&mut state, "far", Some(4));
        add_task(&mut state, "undated", None);
        let done = add_task(&mut state, "done", Some(1));
        set_task_status(&mut state, &done, TaskStatus::Completed).unwrap();

        let messages: Vec<String> = reminder_candidates(&state, today())
            .into_iter()
            .map(|r| r.message)
            .collect();
        assert_eq!(
            messages,
            vec!["Reminder: today - Due today", "Reminder: edge - Due in 3 days"]
        );
    }

    #[test]
    fn window_follows_settings_and_switch() {
        let mut state = PlannerState::default();
        add_task(&mut state, "week", Some(6));
        assert!(reminder_candidates(&state, today()).is_empty());

        update_settings(&mut state, SettingsUpdateBuilder::new().reminder_days(7).build()).unwrap();
        let reminders = reminder_candidates(&state, today());
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].severity, Severity::Warning);
        assert_eq!(reminders[0].message, "Reminder: week - Due Oct 24");

        update_settings(&mut state, SettingsUpdateBuilder::new().reminders(false).build()).unwrap();
        assert!(reminder_candidates(&state, today()).is_empty());
    }

    #[test]
    fn sweep_fires_once_per_day() {
        let mut state = PlannerState::default();
        add_task(&mut state, "Lab Report", Some(1));
        let mut log = ReminderLog::default();

        assert_eq!(log.sweep(&state, today()).len(), 1);
        assert!(log.sweep(&state, today()).is_empty());
        assert_eq!(log.len(), 1);

        let tomorrow = today() + Duration::days(1);
        assert_eq!(log.sweep(&state, tomorrow).len(), 1);
        assert_eq!(log.len(), 1);
        assert!(log.contains(&reminder_marker(&state.tasks[0].id, tomorrow)));
    }

    #[test]
    fn log_serializes_as_plain_array() {
        let mut state = PlannerState::default();
        let id = add_task(&mut state, "x", Some(0));
        let mut log = ReminderLog::default();
        log.sweep(&state, today());

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json, serde_json::json!([reminder_marker(&id, today())]));
        let back: ReminderLog = serde_json::from_value(json).unwrap();
        assert_eq!(back, log);
    }
}
