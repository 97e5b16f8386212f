use std::io::IsTerminal;
use std::sync::OnceLock;

use ontime_core::enums::Severity;
use ontime_store::Notifier;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub notice_color: bool,
    pub quiet: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let table_color = match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::io::stdout().is_terminal()
                && flags.format == OutputFormat::Table
                && !flags.quiet
                && !no_color
        }
    };
    let notice_color = match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stderr().is_terminal() && !no_color,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        notice_color,
        quiet: flags.quiet,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        notice_color: false,
        quiet: false,
        term_width: None,
    })
}

/// Prints notifications to stderr, one line each.
///
/// `--quiet` hides success and info lines; warnings and errors always show.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let prefs = prefs();
        if prefs.quiet && matches!(severity, Severity::Success | Severity::Info) {
            return;
        }
        eprintln!("{}", format_notice(message, severity, prefs.notice_color));
    }
}

fn format_notice(message: &str, severity: Severity, color: bool) -> String {
    let (mark, code) = match severity {
        Severity::Success => ("ok", "32"),
        Severity::Info => ("info", "36"),
        Severity::Warning => ("warn", "33"),
        Severity::Error => ("error", "31"),
    };
    if color {
        format!("\u{1b}[{code}m{mark}\u{1b}[0m {message}")
    } else {
        format!("{mark} {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_notices_carry_a_severity_mark() {
        assert_eq!(
            format_notice("Subject added", Severity::Success, false),
            "ok Subject added"
        );
        assert_eq!(
            format_notice("Add a subject first before scheduling", Severity::Warning, false),
            "warn Add a subject first before scheduling"
        );
    }

    #[test]
    fn colored_notices_wrap_the_mark() {
        let line = format_notice("Time conflict", Severity::Error, true);
        assert!(line.starts_with("\u{1b}[31merror"));
        assert!(line.ends_with("Time conflict"));
    }
}
