mod add;
mod delete;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubjectCommands;
use crate::context::AppContext;

/// Columns shown for subjects in table mode.
const COLUMNS: &[&str] = &["id", "name", "priority", "color", "notes"];

/// Handle `ontime subject`.
pub fn handle(
    action: &SubjectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubjectCommands::List { limit } => list::run(*limit, ctx, flags),
        SubjectCommands::Add {
            name,
            priority,
            notes,
        } => add::run(name, priority.as_deref(), notes.as_deref(), ctx, flags),
        SubjectCommands::Update {
            id,
            name,
            priority,
            notes,
        } => update::run(
            id,
            name.as_deref(),
            priority.as_deref(),
            notes.as_deref(),
            ctx,
            flags,
        ),
        SubjectCommands::Delete { id } => delete::run(id, ctx, flags),
    }
}
