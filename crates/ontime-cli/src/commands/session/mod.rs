mod add;
mod delete;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;

/// Handle `ontime session`.
pub fn handle(
    action: &SessionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SessionCommands::List { date } => list::run(date.as_deref(), ctx, flags),
        SessionCommands::Add {
            subject,
            start,
            end,
        } => add::run(subject, *start, *end, ctx, flags),
        SessionCommands::Delete { id } => delete::run(id, ctx, flags),
    }
}
