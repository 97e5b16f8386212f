//! Response types returned as JSON by `ontime` commands and the IPC channel.
//!
//! These structs define the shape of derived views like `ontime dashboard`,
//! `ontime analytics`, `ontime task list`, and of the backup document written
//! by `ontime export`.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::due::DueStatus;
use crate::entities::{Session, Settings, Subject, Task};
use crate::enums::{Severity, TaskStatus, Urgency};

/// A dated, not-completed task on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDeadline {
    pub task_id: String,
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    pub due: DueStatus,
    pub label: String,
    pub urgency: Urgency,
}

/// A session joined to its subject for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSlot {
    pub session_id: String,
    pub subject_id: String,
    pub subject: String,
    pub color: Option<String>,
    pub date: NaiveDate,
    pub start_hour: u8,
    pub end_hour: u8,
    /// e.g. `"9 AM - 11 AM"`.
    pub label: String,
}

/// A one-per-day nudge about an approaching deadline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub task_id: String,
    pub message: String,
    pub severity: Severity,
    /// Dedup marker, `reminder_{taskId}_{YYYY-MM-DD}`.
    pub marker: String,
}

/// Response from `ontime dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub subject_count: usize,
    pub pending_count: usize,
    pub today_session_count: usize,
    /// Percentage of completed tasks, `0..=100`.
    pub completion_rate: u8,
    pub upcoming: Vec<UpcomingDeadline>,
    pub today_schedule: Vec<ScheduledSlot>,
    /// Reminders that fired for this refresh. Empty once they have fired today.
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

/// One wedge of the status chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: TaskStatus,
    pub count: usize,
    pub color: String,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub total: usize,
    /// No tasks at all; render "no data".
    pub empty: bool,
    pub slices: Vec<StatusSlice>,
}

/// One wedge of the per-subject chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectShare {
    pub subject_id: String,
    pub name: String,
    pub color: String,
    pub count: usize,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDistribution {
    /// No subjects; render "no data".
    pub empty: bool,
    /// Subjects exist but no task references any of them; shares are equal.
    pub placeholder: bool,
    pub shares: Vec<SubjectShare>,
}

/// Response from `ontime analytics`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub status: StatusBreakdown,
    pub subjects: SubjectDistribution,
}

/// A task with its resolved subject name and due classification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskListItem {
    #[serde(flatten)]
    pub task: Task,
    pub subject: String,
    pub due: DueStatus,
    pub due_label: String,
}

/// Response from `ontime session list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub sessions: Vec<ScheduledSlot>,
}

/// The backup document written by `ontime export` and read by `ontime import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub subjects: Vec<Subject>,
    pub tasks: Vec<Task>,
    pub schedule: Vec<Session>,
    #[serde(default)]
    pub settings: Settings,
    pub exported_at: DateTime<Utc>,
}

/// Default backup file name for a local calendar date, `ontime-backup-YYYY-MM-DD.json`.
#[must_use]
pub fn backup_file_name(today: NaiveDate) -> String {
    format!("ontime-backup-{}.json", today.format("%Y-%m-%d"))
}
