use ontime_core::enums::TaskType;
use ontime_core::planner::NewTask;
use ontime_store::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Args<'a> {
    pub title: &'a str,
    pub subject: Option<&'a str>,
    pub due: Option<&'a str>,
    pub task_type: Option<&'a str>,
    pub description: Option<&'a str>,
}

pub fn run(args: &Args<'_>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = NewTask {
        title: args.title.to_string(),
        subject_id: args
            .subject
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string),
        due_date: args.due.map(|value| parse_date(value, "due date")).transpose()?,
        task_type: args
            .task_type
            .map(|value| parse_enum::<TaskType>(value, "type"))
            .transpose()?
            .unwrap_or_default(),
        description: args.description.unwrap_or_default().to_string(),
    };
    let outcome = ctx.execute(Command::TaskCreate(input))?;
    output(&outcome.result, flags.format)
}
