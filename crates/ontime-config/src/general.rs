//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

/// Default number of deadlines on the dashboard.
const fn default_upcoming_limit() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Ask before deleting subjects and tasks and before a reset.
    #[serde(default = "default_true")]
    pub confirm_deletes: bool,

    /// How many upcoming deadlines the dashboard shows.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            confirm_deletes: true,
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 50);
        assert!(config.confirm_deletes);
        assert_eq!(config.upcoming_limit, 5);
    }
}
