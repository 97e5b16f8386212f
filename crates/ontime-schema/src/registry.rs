//! Central schema registry for all OnTime types.
//!
//! The `SchemaRegistry` builds JSON Schemas from ontime-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the OnTime system.
///
/// Built from ontime-core types via [`schemars::schema_for!`]. Provides lookup
/// by name and validation of arbitrary JSON values against registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity, document, input, and
    /// response schemas from ontime-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (4) ---
        register!(schemas, "subject", ontime_core::entities::Subject);
        register!(schemas, "task", ontime_core::entities::Task);
        register!(schemas, "session", ontime_core::entities::Session);
        register!(schemas, "settings", ontime_core::entities::Settings);

        // --- Stored documents (3) ---
        register!(
            schemas,
            "subjects_document",
            Vec<ontime_core::entities::Subject>
        );
        register!(schemas, "tasks_document", Vec<ontime_core::entities::Task>);
        register!(
            schemas,
            "schedule_document",
            Vec<ontime_core::entities::Session>
        );

        // --- Backup (1) ---
        register!(
            schemas,
            "export_document",
            ontime_core::responses::ExportDocument
        );

        // --- Command inputs (6) ---
        register!(schemas, "new_subject", ontime_core::planner::NewSubject);
        register!(
            schemas,
            "subject_update",
            ontime_core::planner::SubjectUpdate
        );
        register!(schemas, "new_session", ontime_core::planner::NewSession);
        register!(schemas, "new_task", ontime_core::planner::NewTask);
        register!(schemas, "task_filter", ontime_core::planner::TaskFilter);
        register!(
            schemas,
            "settings_update",
            ontime_core::planner::SettingsUpdate
        );

        // --- Responses (6) ---
        register!(schemas, "change", ontime_core::state::Change);
        register!(
            schemas,
            "dashboard_summary",
            ontime_core::responses::DashboardSummary
        );
        register!(
            schemas,
            "analytics_report",
            ontime_core::responses::AnalyticsReport
        );
        register!(
            schemas,
            "task_list_item",
            ontime_core::responses::TaskListItem
        );
        register!(schemas, "day_schedule", ontime_core::responses::DaySchedule);
        register!(schemas, "reminder", ontime_core::responses::Reminder);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
