//! Due-date classification.
//!
//! ```text
//! no date      → none
//! d < 0        → overdue (|d| days)
//! d == 0       → due today
//! d == 1       → due tomorrow
//! 1 < d <= 3   → due soon (d days)
//! d > 3        → due later (date)
//! ```
//!
//! `d` is the number of whole calendar days from `today` to the due date.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Urgency;

/// Upper bound (inclusive) of the "due soon" window.
pub const DUE_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DueStatus {
    #[serde(rename = "none")]
    NoDate,
    Overdue { days: i64 },
    DueToday,
    DueTomorrow,
    DueSoon { days: i64 },
    DueLater { date: NaiveDate },
}

impl DueStatus {
    /// Human label, e.g. `"2d overdue"`, `"Due in 3 days"`, `"Due Oct 28"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::NoDate => String::from("No due date"),
            Self::Overdue { days } => format!("{days}d overdue"),
            Self::DueToday => String::from("Due today"),
            Self::DueTomorrow => String::from("Due tomorrow"),
            Self::DueSoon { days } => format!("Due in {days} days"),
            Self::DueLater { date } => format!("Due {}", date.format("%b %-d")),
        }
    }

    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        match self {
            Self::Overdue { .. } | Self::DueToday => Urgency::Urgent,
            Self::DueTomorrow | Self::DueSoon { .. } => Urgency::Soon,
            Self::NoDate | Self::DueLater { .. } => Urgency::Later,
        }
    }
}

/// Whole days from `today` until `due`. Negative when `due` is in the past.
#[must_use]
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Classify an optional due date relative to `today`.
#[must_use]
pub fn classify(due: Option<NaiveDate>, today: NaiveDate) -> DueStatus {
    let Some(due) = due else {
        return DueStatus::NoDate;
    };

    match days_until(due, today) {
        d if d < 0 => DueStatus::Overdue { days: -d },
        0 => DueStatus::DueToday,
        1 => DueStatus::DueTomorrow,
        d if d <= DUE_SOON_DAYS => DueStatus::DueSoon { days: d },
        _ => DueStatus::DueLater { date: due },
    }
}
