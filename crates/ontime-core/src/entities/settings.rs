use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reminder window used when the stored value is zero.
pub const DEFAULT_REMINDER_DAYS: u32 = 3;

const fn default_true() -> bool {
    true
}

fn default_accent() -> String {
    String::from("teal")
}

const fn default_reminder_days() -> u32 {
    DEFAULT_REMINDER_DAYS
}

/// Process-wide user preferences. A missing document reads as the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_true")]
    pub reminders: bool,
    #[serde(
        default = "default_reminder_days",
        deserialize_with = "crate::serde_compat::lenient_days"
    )]
    pub reminder_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            accent: default_accent(),
            reminders: true,
            reminder_days: DEFAULT_REMINDER_DAYS,
        }
    }
}

impl Settings {
    /// Reminder window in days. Zero falls back to the default window.
    #[must_use]
    pub const fn effective_reminder_days(&self) -> u32 {
        if self.reminder_days == 0 {
            DEFAULT_REMINDER_DAYS
        } else {
            self.reminder_days
        }
    }
}
