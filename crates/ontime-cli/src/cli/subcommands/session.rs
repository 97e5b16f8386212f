use clap::Subcommand;

/// Schedule commands. Sessions are always booked for today.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Show the sessions on a date (default today).
    List {
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Book a study block today.
    Add {
        /// Subject id.
        subject: String,
        /// Start hour, 6-22.
        #[arg(long)]
        start: u8,
        /// End hour, 6-22, after the start.
        #[arg(long)]
        end: u8,
    },
    /// Remove a session.
    Delete { id: String },
}
