use clap::Subcommand;

/// Subject commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubjectCommands {
    /// List subjects in the order they were added.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Add a subject.
    Add {
        name: String,
        /// high, medium, or low
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit a subject. Omitted fields keep their current value.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a subject. Its tasks and sessions are kept.
    Delete { id: String },
}
