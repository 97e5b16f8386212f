use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::take_rows;
use crate::context::AppContext;
use crate::output::output_columns;

pub fn run(limit: Option<u32>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.execute(Command::SubjectList)?;
    let subjects = take_rows(&outcome.result, limit, flags, &ctx.config.general)?;
    output_columns(&subjects, flags.format, super::COLUMNS)
}
