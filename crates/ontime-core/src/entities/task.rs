use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{TaskStatus, TaskType};

/// A trackable unit of work with an optional subject and due date.
///
/// `subject_id` is a loose reference: deleting the subject leaves it dangling
/// and views render the subject as `"Unknown"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub task_type: TaskType,
    #[serde(default, deserialize_with = "crate::serde_compat::empty_string_as_none")]
    #[schemars(with = "Option<String>")]
    pub subject_id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_compat::optional_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}
