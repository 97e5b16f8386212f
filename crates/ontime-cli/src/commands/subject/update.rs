use anyhow::bail;
use ontime_core::enums::Priority;
use ontime_core::planner::SubjectUpdate;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    name: Option<&str>,
    priority: Option<&str>,
    notes: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(current) = ctx.planner.state().subject(id) else {
        bail!("subject not found: {id}");
    };
    let priority = match priority {
        Some(value) => parse_enum::<Priority>(value, "priority")?,
        None => current.priority,
    };
    let input = SubjectUpdate {
        id: id.to_string(),
        name: name.map_or_else(|| current.name.clone(), str::to_string),
        priority,
        notes: notes.map_or_else(|| current.notes.clone(), str::to_string),
    };
    let outcome = ctx.execute(Command::SubjectUpdate(input))?;
    output(&outcome.result, flags.format)
}
