use std::path::PathBuf;

use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ontime export`.
pub fn handle(args: &ExportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.output.as_deref() == Some("-") {
        let document = ctx.planner.export();
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let path = args
        .output
        .as_ref()
        .map_or_else(|| ctx.planner.default_backup_path(), PathBuf::from);
    let document = ctx
        .planner
        .export_to(&path)
        .with_context(|| format!("failed to write backup {}", path.display()))?;

    output(
        &json!({
            "path": path.display().to_string(),
            "subjects": document.subjects.len(),
            "tasks": document.tasks.len(),
            "schedule": document.schedule.len(),
            "exportedAt": document.exported_at,
        }),
        flags.format,
    )
}
