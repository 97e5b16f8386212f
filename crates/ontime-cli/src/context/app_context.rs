use std::path::{Path, PathBuf};

use anyhow::Context;
use ontime_config::OntimeConfig;
use ontime_core::errors::CoreError;
use ontime_store::{
    Command, FileStore, Notifier, Outcome, Planner, PlannerOptions, SystemClock,
};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub planner: Planner,
    pub config: OntimeConfig,
    pub data_dir: PathBuf,
}

impl AppContext {
    /// Open the document store and load the planner state.
    ///
    /// `--data-dir` wins over `storage.data_dir`, which wins over the
    /// platform data directory.
    pub fn init(
        config: OntimeConfig,
        flags: &GlobalFlags,
        notifier: Box<dyn Notifier>,
    ) -> anyhow::Result<Self> {
        let data_dir = match flags.data_dir.as_deref() {
            Some(dir) => PathBuf::from(dir),
            None => config
                .storage
                .resolved_data_dir()
                .context("failed to resolve the data directory")?,
        };

        let store = FileStore::open(&data_dir).with_context(|| {
            format!("failed to open data directory {}", data_dir.display())
        })?;

        let options = PlannerOptions {
            pretty: config.storage.pretty,
            upcoming_limit: usize::try_from(config.general.upcoming_limit)?,
        };
        let planner = Planner::load(Box::new(store), Box::new(SystemClock), notifier, options);
        tracing::debug!(dir = %data_dir.display(), "application context ready");

        Ok(Self {
            planner,
            config,
            data_dir,
        })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Run a command, turning validation failures into a notification.
    ///
    /// The returned error still carries the `CoreError`, so `main` can exit
    /// non-zero without printing it twice.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<Outcome> {
        let method = command.method();
        match self.planner.execute(command) {
            Ok(outcome) => Ok(outcome),
            Err(CoreError::Validation(validation)) => {
                crate::ui::StderrNotifier.notify(&validation.to_string(), validation.severity());
                Err(CoreError::Validation(validation).into())
            }
            Err(error) => Err(anyhow::Error::new(error).context(format!("{method} failed"))),
        }
    }
}
