use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks: open first, then by due date.
    List {
        /// pending, in-progress, or completed
        #[arg(long)]
        status: Option<String>,
        /// Subject id.
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Add a task.
    Add {
        title: String,
        /// Subject id.
        #[arg(long)]
        subject: Option<String>,
        /// Due date, YYYY-MM-DD.
        #[arg(long)]
        due: Option<String>,
        /// assignment or exam
        #[arg(long = "type")]
        task_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task.
    Delete { id: String },
    /// Set a task's status.
    Status {
        id: String,
        /// pending, in-progress, or completed
        status: String,
    },
    /// Mark a task completed, or reopen a completed one.
    Toggle { id: String },
}
