use ontime_core::enums::Priority;
use ontime_core::planner::NewSubject;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    name: &str,
    priority: Option<&str>,
    notes: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let priority = priority
        .map(|value| parse_enum::<Priority>(value, "priority"))
        .transpose()?
        .unwrap_or_default();
    let input = NewSubject {
        name: name.to_string(),
        priority,
        notes: notes.unwrap_or_default().to_string(),
    };
    let outcome = ctx.execute(Command::SubjectCreate(input))?;
    output(&outcome.result, flags.format)
}
