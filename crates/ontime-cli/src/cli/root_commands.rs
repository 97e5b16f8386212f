use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    SessionCommands, SettingsCommands, SubjectCommands, TaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Subjects.
    Subject {
        #[command(subcommand)]
        action: SubjectCommands,
    },
    /// Today's study schedule.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Tasks and deadlines.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Counts, upcoming deadlines, today's schedule, and reminders.
    Dashboard,
    /// Task status and per-subject breakdowns.
    Analytics,
    /// Preferences.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Write a backup of all data.
    Export(ExportArgs),
    /// Replace all data with a backup.
    Import(ImportArgs),
    /// Delete all subjects, tasks, and sessions.
    Reset,
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
    /// Serve line-delimited JSON requests on stdin.
    Ipc,
}

/// Arguments for `ontime export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Destination file; `-` prints to stdout.
    /// Defaults to `ontime-backup-YYYY-MM-DD.json` in the current directory.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for `ontime import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Backup file written by `ontime export`.
    pub path: String,
}

/// Arguments for `ontime schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name; omit to list all names.
    pub type_name: Option<String>,
}
