use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::confirm;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ontime reset`. Settings survive.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let prompt = "Are you sure you want to delete ALL data? This action cannot be undone.";
    if !confirm(prompt, ctx.config.general.confirm_deletes, flags)? {
        tracing::info!("reset cancelled");
        return Ok(());
    }
    let outcome = ctx.execute(Command::DataReset)?;
    output(&outcome.result, flags.format)
}
