use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.execute(Command::SessionDelete { id: id.to_string() })?;
    output(&outcome.change, flags.format)
}
