//! Backup export, import, and reset.

use std::path::{Path, PathBuf};

use ontime_core::enums::Severity;
use ontime_core::errors::CoreError;
use ontime_core::planner;
use ontime_core::responses::{ExportDocument, backup_file_name};
use ontime_core::state::Change;

use crate::error::StoreError;
use crate::kv::write_atomic;
use crate::service::Planner;

/// Schema every imported document must satisfy.
const EXPORT_SCHEMA: &str = "export_document";

impl Planner {
    /// Snapshot all four collections with the current instant.
    #[must_use]
    pub fn snapshot(&self) -> ExportDocument {
        planner::export_document(self.state(), self.clock().now())
    }

    /// `ontime-backup-YYYY-MM-DD.json` for the planner's today, in the working directory.
    #[must_use]
    pub fn default_backup_path(&self) -> PathBuf {
        PathBuf::from(backup_file_name(self.clock().today()))
    }

    /// Snapshot the state and announce the export.
    #[must_use]
    pub fn export(&self) -> ExportDocument {
        let document = self.snapshot();
        self.notifier()
            .notify("Data exported successfully", Severity::Success);
        document
    }

    /// Write a pretty-printed backup to `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the file cannot be written.
    pub fn export_to(&self, path: &Path) -> Result<ExportDocument, StoreError> {
        let document = self.snapshot();
        write_backup(path, &document)?;
        tracing::info!(path = %path.display(), "backup written");
        self.notifier()
            .notify("Data exported successfully", Severity::Success);
        Ok(document)
    }

    /// Replace every collection with a backup document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Import` when the document does not match the
    /// backup schema; the state is left untouched.
    pub fn import(&mut self, document: serde_json::Value) -> Result<Change, CoreError> {
        if let Err(error) = self.schema().validate(EXPORT_SCHEMA, &document) {
            tracing::warn!(%error, "backup rejected by schema");
            return Err(CoreError::Import(error.to_string()));
        }
        let document = planner::parse_export(document)?;
        let change = planner::import_document(self.state_mut(), document);
        self.commit(Ok(change))
    }

    /// Clear subjects, tasks and schedule. Settings are kept.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` keeps the command surface uniform.
    pub fn reset(&mut self) -> Result<Change, CoreError> {
        let change = planner::reset(self.state_mut());
        self.commit(Ok(change))
    }
}

/// Write `document` as pretty JSON, atomically.
///
/// # Errors
///
/// Returns `StoreError` on serialization or I/O failure.
pub fn write_backup(path: &Path, document: &ExportDocument) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(document)?;
    write_atomic(path, &raw)
}

/// Read a backup file as raw JSON, ready for [`Planner::import`].
///
/// # Errors
///
/// Returns `StoreError` when the file cannot be read or is not JSON.
pub fn read_backup(path: &Path) -> Result<serde_json::Value, StoreError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
