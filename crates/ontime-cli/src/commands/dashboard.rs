use ontime_store::Command;
use serde_json::{Value, json};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_sections};

/// Handle `ontime dashboard`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.execute(Command::Dashboard)?;
    if flags.format != OutputFormat::Table {
        return output(&outcome.result, flags.format);
    }
    output_sections(&sections(&outcome.result), flags.format)
}

fn sections(summary: &Value) -> Vec<(&'static str, Value)> {
    let overview = json!({
        "today": summary["today"],
        "subjects": summary["subjectCount"],
        "pending tasks": summary["pendingCount"],
        "sessions today": summary["todaySessionCount"],
        "completion": format!("{}%", summary["completionRate"].as_u64().unwrap_or(0)),
    });

    let upcoming = rows(&summary["upcoming"], |item| {
        json!({
            "title": item["title"],
            "subject": item["subject"],
            "due": item["label"],
            "urgency": item["urgency"],
        })
    });
    let schedule = rows(&summary["todaySchedule"], |slot| {
        json!({ "time": slot["label"], "subject": slot["subject"] })
    });

    let mut sections = vec![
        ("Overview", overview),
        ("Upcoming deadlines", or_placeholder(upcoming, "No upcoming deadlines")),
        ("Today's schedule", or_placeholder(schedule, "No sessions scheduled")),
    ];

    let reminders = rows(&summary["reminders"], |reminder| {
        json!({ "reminder": reminder["message"], "level": reminder["severity"] })
    });
    if !reminders.is_empty() {
        sections.push(("Reminders", Value::Array(reminders)));
    }
    sections
}

fn rows(list: &Value, project: impl Fn(&Value) -> Value) -> Vec<Value> {
    list.as_array()
        .map(|items| items.iter().map(project).collect())
        .unwrap_or_default()
}

fn or_placeholder(rows: Vec<Value>, empty: &str) -> Value {
    if rows.is_empty() {
        Value::String(empty.to_string())
    } else {
        Value::Array(rows)
    }
}
