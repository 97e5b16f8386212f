mod add;
mod delete;
mod list;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `ontime task`.
pub fn handle(action: &TaskCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::List {
            status,
            subject,
            limit,
        } => list::run(status.as_deref(), subject.as_deref(), *limit, ctx, flags),
        TaskCommands::Add {
            title,
            subject,
            due,
            task_type,
            description,
        } => add::run(
            &add::Args {
                title,
                subject: subject.as_deref(),
                due: due.as_deref(),
                task_type: task_type.as_deref(),
                description: description.as_deref(),
            },
            ctx,
            flags,
        ),
        TaskCommands::Delete { id } => delete::run(id, ctx, flags),
        TaskCommands::Status { id, status } => status::set(id, status, ctx, flags),
        TaskCommands::Toggle { id } => status::toggle(id, ctx, flags),
    }
}
