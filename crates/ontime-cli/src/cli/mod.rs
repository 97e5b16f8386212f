use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ontime` binary.
#[derive(Debug, Parser)]
#[command(name = "ontime", version, about = "OnTime - study planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows for list output
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress success notifications)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Data directory (defaults to the configured `storage.data_dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            data_dir: self.data_dir.clone(),
            yes: self.yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{SessionCommands, SubjectCommands, TaskCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "ontime",
            "--format",
            "json",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ontime", "analytics", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Analytics));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["ontime", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn table_is_the_default_format() {
        let cli = Cli::try_parse_from(["ontime", "dashboard"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["ontime", "--data-dir", "/tmp/ontime", "-y", "reset"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/ontime"));
        assert!(flags.yes);
    }

    #[test]
    fn subject_add_takes_name_and_priority() {
        let cli = Cli::try_parse_from([
            "ontime", "subject", "add", "Biology", "--priority", "high",
        ])
        .expect("cli should parse");
        let Commands::Subject {
            action: SubjectCommands::Add { name, priority, .. },
        } = cli.command
        else {
            panic!("expected subject add");
        };
        assert_eq!(name, "Biology");
        assert_eq!(priority.as_deref(), Some("high"));
    }

    #[test]
    fn session_add_parses_hours() {
        let cli = Cli::try_parse_from([
            "ontime", "session", "add", "sub-1", "--start", "9", "--end", "11",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Session {
                action: SessionCommands::Add {
                    start: 9,
                    end: 11,
                    ..
                }
            }
        ));
    }

    #[test]
    fn session_hours_must_be_numbers() {
        let parsed = Cli::try_parse_from([
            "ontime", "session", "add", "sub-1", "--start", "nine", "--end", "11",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn task_list_filters() {
        let cli = Cli::try_parse_from([
            "ontime", "task", "list", "--status", "in-progress", "--subject", "sub-1",
        ])
        .expect("cli should parse");
        let Commands::Task {
            action: TaskCommands::List {
                status, subject, ..
            },
        } = cli.command
        else {
            panic!("expected task list");
        };
        assert_eq!(status.as_deref(), Some("in-progress"));
        assert_eq!(subject.as_deref(), Some("sub-1"));
    }
}
