use anyhow::bail;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::confirm;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(task) = ctx.planner.state().task(id) else {
        bail!("task not found: {id}");
    };
    let prompt = format!("Delete \"{}\"?", task.title);
    if !confirm(&prompt, ctx.config.general.confirm_deletes, flags)? {
        tracing::info!(id, "task delete cancelled");
        return Ok(());
    }
    let outcome = ctx.execute(Command::TaskDelete { id: id.to_string() })?;
    output(&outcome.change, flags.format)
}
