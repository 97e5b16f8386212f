use anyhow::bail;
use ontime_core::planner::{SettingsUpdate, SettingsUpdateBuilder};
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ontime settings`.
pub fn handle(
    action: &SettingsCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let command = match action {
        SettingsCommands::Show => Command::SettingsGet,
        SettingsCommands::Set {
            dark_mode,
            accent,
            reminders,
            reminder_days,
        } => {
            let update = build_update(*dark_mode, accent.as_deref(), *reminders, *reminder_days);
            if update.is_empty() {
                bail!(
                    "nothing to change: pass --dark-mode, --accent, --reminders, or --reminder-days"
                );
            }
            Command::SettingsUpdate(update)
        }
        SettingsCommands::ToggleTheme => Command::SettingsToggleTheme,
    };
    let outcome = ctx.execute(command)?;
    output(&outcome.result, flags.format)
}

fn build_update(
    dark_mode: Option<bool>,
    accent: Option<&str>,
    reminders: Option<bool>,
    reminder_days: Option<u32>,
) -> SettingsUpdate {
    let mut builder = SettingsUpdateBuilder::new();
    if let Some(dark_mode) = dark_mode {
        builder = builder.dark_mode(dark_mode);
    }
    if let Some(accent) = accent {
        builder = builder.accent(accent);
    }
    if let Some(reminders) = reminders {
        builder = builder.reminders(reminders);
    }
    if let Some(days) = reminder_days {
        builder = builder.reminder_days(days);
    }
    builder.build()
}
