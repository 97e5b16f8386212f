//! User preferences.

use ontime_core::entities::Settings;
use ontime_core::errors::CoreError;
use ontime_core::planner::{self, SettingsUpdate};
use ontime_core::state::Change;

use crate::service::Planner;

impl Planner {
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.state().settings
    }

    /// Apply a partial update and write the settings document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the accent is blank.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<Change, CoreError> {
        let result = planner::update_settings(self.state_mut(), update);
        self.commit(result)
    }

    /// Flip between light and dark mode.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` keeps the command surface uniform.
    pub fn toggle_theme(&mut self) -> Result<Change, CoreError> {
        let change = planner::toggle_theme(self.state_mut());
        self.commit(Ok(change))
    }
}

#[cfg(test)]
mod tests {
    use ontime_core::planner::SettingsUpdateBuilder;

    use crate::keys;
    use crate::kv::{KeyValueStore, MemoryStore};
    use crate::test_support::helpers::{observed_planner, planner_with};

    #[test]
    fn partial_update_keeps_other_fields() {
        let mut planner = planner_with(MemoryStore::new());
        planner
            .update_settings(SettingsUpdateBuilder::new().reminder_days(7).build())
            .unwrap();
        let settings = planner.settings();
        assert_eq!(settings.reminder_days, 7);
        assert_eq!(settings.accent, "teal");
        assert!(settings.reminders);
    }

    #[test]
    fn blank_accent_is_rejected() {
        let mut planner = planner_with(MemoryStore::new());
        let result = planner.update_settings(SettingsUpdateBuilder::new().accent("  ").build());
        assert!(result.is_err());
        assert_eq!(planner.settings().accent, "teal");
    }

    #[test]
    fn toggle_theme_persists() {
        let (mut planner, notifier) = observed_planner();
        planner.toggle_theme().unwrap();
        assert!(planner.settings().dark_mode);

        let raw = planner.store().get(keys::SETTINGS).unwrap().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["darkMode"], true);
        assert_eq!(notifier.drain()[0].message, "Settings saved");
    }
}
