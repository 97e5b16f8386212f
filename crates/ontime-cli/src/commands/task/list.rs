use ontime_core::enums::TaskStatus;
use ontime_core::planner::TaskFilter;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::take_rows;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output_columns;

const COLUMNS: &[&str] = &["id", "title", "type", "subject", "status", "dueLabel"];

pub fn run(
    status: Option<&str>,
    subject: Option<&str>,
    limit: Option<u32>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = TaskFilter {
        status: status
            .map(|value| parse_enum::<TaskStatus>(value, "status"))
            .transpose()?,
        subject_id: subject.map(str::to_string),
    };
    let outcome = ctx.execute(Command::TaskList(filter))?;
    let tasks = take_rows(&outcome.result, limit, flags, &ctx.config.general)?;
    output_columns(&tasks, flags.format, COLUMNS)
}
