//! Document keys in the key-value store.

pub const SUBJECTS: &str = "ontime_subjects";
pub const TASKS: &str = "ontime_tasks";
pub const SCHEDULE: &str = "ontime_schedule";
pub const SETTINGS: &str = "ontime_settings";
pub const REMINDERS: &str = "ontime_reminders";
