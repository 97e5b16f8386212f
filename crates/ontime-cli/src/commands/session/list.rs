use ontime_store::Command;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::{output, output_columns};

const COLUMNS: &[&str] = &["sessionId", "label", "subject", "subjectId"];

pub fn run(date: Option<&str>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = date.map(|value| parse_date(value, "date")).transpose()?;
    let outcome = ctx.execute(Command::SessionList { date })?;
    if flags.format != OutputFormat::Table {
        return output(&outcome.result, flags.format);
    }

    let sessions = &outcome.result["sessions"];
    if sessions.as_array().is_none_or(Vec::is_empty) {
        let day = outcome.result["date"].as_str().unwrap_or_default();
        println!("No sessions scheduled for {day}");
        return Ok(());
    }
    output_columns(sessions, flags.format, COLUMNS)
}
