use clap::Subcommand;

/// Settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show current settings.
    Show,
    /// Change one or more settings.
    Set {
        #[arg(long)]
        dark_mode: Option<bool>,
        #[arg(long)]
        accent: Option<String>,
        #[arg(long)]
        reminders: Option<bool>,
        /// Days ahead a deadline starts reminding; 0 uses the default of 3.
        #[arg(long)]
        reminder_days: Option<u32>,
    },
    /// Switch between light and dark mode.
    ToggleTheme,
}
