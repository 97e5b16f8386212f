use std::path::Path;

use anyhow::Context;
use ontime_store::{Command, read_backup};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::commands::shared::confirm::confirm;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ontime import`.
pub fn handle(args: &ImportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = Path::new(&args.path);
    let document =
        read_backup(path).with_context(|| format!("failed to read backup {}", path.display()))?;

    let prompt = "Importing replaces all current subjects, tasks, and sessions. Continue?";
    if !confirm(prompt, ctx.config.general.confirm_deletes, flags)? {
        tracing::info!("import cancelled");
        return Ok(());
    }

    let outcome = ctx.execute(Command::DataImport(document))?;
    output(&outcome.result, flags.format)
}
