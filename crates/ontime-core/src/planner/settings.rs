//! Settings commands and the partial-update builder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ChangeAction, EntityKind};
use crate::errors::{CoreError, ValidationError};
use crate::state::{Change, PlannerState};

/// A partial settings change. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<u32>,
}

impl SettingsUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dark_mode.is_none()
            && self.accent.is_none()
            && self.reminders.is_none()
            && self.reminder_days.is_none()
    }
}

pub struct SettingsUpdateBuilder(SettingsUpdate);

impl SettingsUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SettingsUpdate::default())
    }

    #[must_use]
    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.0.dark_mode = Some(dark_mode);
        self
    }

    #[must_use]
    pub fn accent(mut self, accent: impl Into<String>) -> Self {
        self.0.accent = Some(accent.into());
        self
    }

    #[must_use]
    pub fn reminders(mut self, reminders: bool) -> Self {
        self.0.reminders = Some(reminders);
        self
    }

    #[must_use]
    pub fn reminder_days(mut self, days: u32) -> Self {
        self.0.reminder_days = Some(days);
        self
    }

    #[must_use]
    pub fn build(self) -> SettingsUpdate {
        self.0
    }
}

impl Default for SettingsUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a partial update.
///
/// # Errors
///
/// Returns `ValidationError::EmptyAccent` when the accent trims to empty.
pub fn update_settings(
    state: &mut PlannerState,
    update: SettingsUpdate,
) -> Result<Change, CoreError> {
    let accent = match update.accent {
        Some(accent) if accent.trim().is_empty() => return Err(ValidationError::EmptyAccent.into()),
        Some(accent) => Some(accent.trim().to_string()),
        None => None,
    };

    let settings = &mut state.settings;
    if let Some(dark_mode) = update.dark_mode {
        settings.dark_mode = dark_mode;
    }
    if let Some(accent) = accent {
        settings.accent = accent;
    }
    if let Some(reminders) = update.reminders {
        settings.reminders = reminders;
    }
    if let Some(days) = update.reminder_days {
        settings.reminder_days = days;
    }
    Ok(Change::bulk(EntityKind::Settings, ChangeAction::Updated))
}

/// Flip between light and dark mode.
pub fn toggle_theme(state: &mut PlannerState) -> Change {
    state.settings.dark_mode = !state.settings.dark_mode;
    Change::bulk(EntityKind::Settings, ChangeAction::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Settings;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_update_touches_only_given_fields() {
        let mut state = PlannerState::default();
        let update = SettingsUpdateBuilder::new()
            .accent(" purple ")
            .reminder_days(5)
            .build();
        update_settings(&mut state, update).unwrap();

        assert_eq!(
            state.settings,
            Settings {
                dark_mode: false,
                accent: "purple".into(),
                reminders: true,
                reminder_days: 5,
            }
        );
    }

    #[test]
    fn empty_accent_is_rejected() {
        let mut state = PlannerState::default();
        let update = SettingsUpdateBuilder::new()
            .dark_mode(true)
            .accent("  ")
            .build();
        assert!(matches!(
            update_settings(&mut state, update),
            Err(CoreError::Validation(ValidationError::EmptyAccent))
        ));
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn toggle_theme_flips_back_and_forth() {
        let mut state = PlannerState::default();
        toggle_theme(&mut state);
        assert!(state.settings.dark_mode);
        let change = toggle_theme(&mut state);
        assert!(!state.settings.dark_mode);
        assert_eq!(change.entity, EntityKind::Settings);
    }

    #[test]
    fn builder_output_skips_unset_fields() {
        let update = SettingsUpdateBuilder::new().reminders(false).build();
        assert!(!update.is_empty());
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"reminders": false}));
        assert!(SettingsUpdate::default().is_empty());
    }
}
