use ontime_store::Command;
use serde_json::{Value, json};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_sections};

const NO_DATA: &str = "No data";

/// Handle `ontime analytics`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.execute(Command::Analytics)?;
    if flags.format != OutputFormat::Table {
        return output(&outcome.result, flags.format);
    }
    output_sections(&sections(&outcome.result), flags.format)
}

fn sections(report: &Value) -> Vec<(&'static str, Value)> {
    let status = if report["status"]["empty"].as_bool().unwrap_or(true) {
        Value::String(NO_DATA.to_string())
    } else {
        slices(&report["status"]["slices"], "status")
    };

    let subjects = if report["subjects"]["empty"].as_bool().unwrap_or(true) {
        Value::String(NO_DATA.to_string())
    } else {
        slices(&report["subjects"]["shares"], "name")
    };

    vec![("Tasks by status", status), ("Tasks by subject", subjects)]
}

fn slices(list: &Value, label: &str) -> Value {
    let rows = list
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    json!({
                        label: item[label],
                        "count": item["count"],
                        "share": percent(&item["share"]),
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    Value::Array(rows)
}

fn percent(share: &Value) -> String {
    format!("{:.1}%", share.as_f64().unwrap_or(0.0) * 100.0)
}
