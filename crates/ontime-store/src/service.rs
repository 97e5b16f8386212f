//! The `Planner` controller: owns the state, persists it, and reports changes.
//!
//! `Planner` wraps a `KeyValueStore` (documents), a `Clock` ("today"), a
//! `Notifier` (user-facing toasts), and the `SchemaRegistry` (document
//! checks). Repo methods live in `impl Planner` blocks under `repos/`.

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use ontime_core::enums::{EntityKind, Severity};
use ontime_core::errors::CoreError;
use ontime_core::responses::Reminder;
use ontime_core::state::{Change, PlannerState};
use ontime_core::views::ReminderLog;
use ontime_schema::SchemaRegistry;

use crate::clock::Clock;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::notify::Notifier;

/// Knobs the presentation layer passes down from configuration.
#[derive(Debug, Clone, Copy)]
pub struct PlannerOptions {
    /// Pretty-print stored documents.
    pub pretty: bool,
    /// Deadlines shown on the dashboard.
    pub upcoming_limit: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            upcoming_limit: 5,
        }
    }
}

/// Single owner of the planner state.
///
/// Every mutation follows this protocol:
/// 1. Run the pure command against the in-memory state
/// 2. On success, write the affected document(s)
/// 3. Notify the user and return the change descriptor
///
/// A failed write is logged and otherwise ignored; the in-memory change stands.
pub struct Planner {
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    schema: SchemaRegistry,
    options: PlannerOptions,
    state: PlannerState,
    reminders: ReminderLog,
}

impl Planner {
    /// Load every document from `store` and build a planner around it.
    ///
    /// Missing documents start empty; malformed ones are logged and replaced
    /// by their defaults.
    pub fn load(
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        notifier: Box<dyn Notifier>,
        options: PlannerOptions,
    ) -> Self {
        let schema = SchemaRegistry::new();
        let state = PlannerState {
            subjects: load_document(store.as_ref(), &schema, keys::SUBJECTS, Some("subjects_document")),
            tasks: load_document(store.as_ref(), &schema, keys::TASKS, Some("tasks_document")),
            schedule: load_document(store.as_ref(), &schema, keys::SCHEDULE, Some("schedule_document")),
            settings: load_document(store.as_ref(), &schema, keys::SETTINGS, Some("settings")),
        };
        let reminders = load_document(store.as_ref(), &schema, keys::REMINDERS, None);

        tracing::debug!(
            subjects = state.subjects.len(),
            tasks = state.tasks.len(),
            sessions = state.schedule.len(),
            "planner state loaded"
        );

        Self {
            store,
            clock,
            notifier,
            schema,
            options,
            state,
            reminders,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PlannerState {
        &self.state
    }

    #[must_use]
    pub const fn reminder_log(&self) -> &ReminderLog {
        &self.reminders
    }

    #[must_use]
    pub const fn options(&self) -> PlannerOptions {
        self.options
    }

    /// Access the schema registry.
    #[must_use]
    pub const fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub(crate) const fn state_mut(&mut self) -> &mut PlannerState {
        &mut self.state
    }

    /// Record and return today's reminders that have not fired yet.
    ///
    /// The reminder log is written only when it changed.
    pub(crate) fn sweep_reminders(&mut self, today: NaiveDate) -> Vec<Reminder> {
        let before = self.reminders.clone();
        let fired = self.reminders.sweep(&self.state, today);
        if self.reminders != before {
            self.persist_reminders();
        }
        for reminder in &fired {
            tracing::debug!(task = %reminder.task_id, "reminder fired");
            self.notifier.notify(&reminder.message, reminder.severity);
        }
        fired
    }

    /// Persist and announce a successful command; pass failures through untouched.
    pub(crate) fn commit(
        &mut self,
        result: Result<Change, CoreError>,
    ) -> Result<Change, CoreError> {
        let change = result?;
        self.persist(change.entity);
        tracing::debug!(
            entity = %change.entity,
            action = %change.action,
            id = change.id.as_deref().unwrap_or("-"),
            "change committed"
        );
        self.notifier.notify(change.message(), Severity::Success);
        Ok(change)
    }

    /// Write the document(s) backing `entity`.
    pub(crate) fn persist(&mut self, entity: EntityKind) {
        let store = self.store.as_mut();
        let pretty = self.options.pretty;
        match entity {
            EntityKind::Subject => save(store, pretty, keys::SUBJECTS, &self.state.subjects),
            EntityKind::Task => save(store, pretty, keys::TASKS, &self.state.tasks),
            EntityKind::Session => save(store, pretty, keys::SCHEDULE, &self.state.schedule),
            EntityKind::Settings => save(store, pretty, keys::SETTINGS, &self.state.settings),
            EntityKind::All => {
                save(store, pretty, keys::SUBJECTS, &self.state.subjects);
                save(store, pretty, keys::TASKS, &self.state.tasks);
                save(store, pretty, keys::SCHEDULE, &self.state.schedule);
                save(store, pretty, keys::SETTINGS, &self.state.settings);
            }
        }
    }

    pub(crate) fn persist_reminders(&mut self) {
        save(
            self.store.as_mut(),
            self.options.pretty,
            keys::REMINDERS,
            &self.reminders,
        );
    }
}

/// Serialize and write one document. Failures are logged, never returned.
fn save<T: Serialize>(store: &mut dyn KeyValueStore, pretty: bool, key: &str, value: &T) {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let result = match encoded {
        Ok(raw) => store.set(key, &raw),
        Err(e) => Err(e.into()),
    };
    match result {
        Ok(()) => tracing::debug!(key, "document saved"),
        Err(error) => tracing::error!(key, %error, "failed to save document"),
    }
}

/// Read and decode one document, falling back to the default on any problem.
fn load_document<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    schema: &SchemaRegistry,
    key: &str,
    schema_name: Option<&str>,
) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "document missing, starting empty");
            return T::default();
        }
        Err(error) => {
            tracing::warn!(key, %error, "document unreadable, using defaults");
            return T::default();
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "document is not valid JSON, using defaults");
            return T::default();
        }
    };

    if let Some(name) = schema_name {
        if let Err(error) = schema.validate(name, &value) {
            tracing::warn!(key, %error, "document does not match its schema");
        }
    }

    match serde_json::from_value(value) {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(key, %error, "document malformed, using defaults");
            T::default()
        }
    }
}
