use ontime_core::planner::NewSession;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    subject: &str,
    start: u8,
    end: u8,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = NewSession {
        subject_id: subject.to_string(),
        start_hour: start,
        end_hour: end,
    };
    let outcome = ctx.execute(Command::SessionCreate(input))?;
    output(&outcome.result, flags.format)
}
