use ontime_core::enums::TaskStatus;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn set(id: &str, status: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_enum::<TaskStatus>(status, "status")?;
    let outcome = ctx.execute(Command::TaskSetStatus {
        id: id.to_string(),
        status,
    })?;
    output(&outcome.result, flags.format)
}

pub fn toggle(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.execute(Command::TaskToggle { id: id.to_string() })?;
    output(&outcome.result, flags.format)
}
