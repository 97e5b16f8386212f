//! Read-only views derived from [`PlannerState`](crate::state::PlannerState).
//!
//! Nothing here mutates state or touches storage, except that
//! [`ReminderLog`] records which reminders already fired.

pub mod analytics;
pub mod dashboard;
pub mod reminders;

pub use analytics::{analytics, status_breakdown, subject_distribution};
pub use dashboard::{
    completion_rate, dashboard, day_schedule, task_items, upcoming_deadlines,
};
pub use reminders::{ReminderLog, reminder_candidates, reminder_marker};
