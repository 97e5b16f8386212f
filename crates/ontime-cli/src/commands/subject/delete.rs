use anyhow::bail;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::confirm;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(subject) = ctx.planner.state().subject(id) else {
        bail!("subject not found: {id}");
    };
    let prompt = format!("Delete \"{}\"? This cannot be undone.", subject.name);
    if !confirm(&prompt, ctx.config.general.confirm_deletes, flags)? {
        tracing::info!(id, "subject delete cancelled");
        return Ok(());
    }
    let outcome = ctx.execute(Command::SubjectDelete { id: id.to_string() })?;
    output(&outcome.change, flags.format)
}
