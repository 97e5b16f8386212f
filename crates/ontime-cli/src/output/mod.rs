use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::Cell;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list, showing only `columns` (in that order) in table mode.
///
/// JSON and raw output keep every field.
pub fn output_columns<T: Serialize>(
    value: &T,
    format: OutputFormat,
    columns: &[&str],
) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(value, format);
    }
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Array(items) if !items.is_empty() => render_columns(&items, columns),
        other => render_table(&other)?,
    };
    println!("{rendered}");
    Ok(())
}

/// Print titled sections, each rendered as its own table.
pub fn output_sections(sections: &[(&str, Value)], format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        let map = sections
            .iter()
            .map(|(title, value)| ((*title).to_string(), value.clone()))
            .collect::<serde_json::Map<_, _>>();
        return output(&Value::Object(map), format);
    }
    let mut blocks = Vec::with_capacity(sections.len());
    for (title, value) in sections {
        blocks.push(format!("{title}\n{}", render_table(value)?));
    }
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_columns(items: &[Value], columns: &[&str]) -> String {
    let rows = items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| field_cell(column, item.get(*column)))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render(columns, &rows, table_options())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| {
                    let cell = field_cell(&key, Some(&value));
                    vec![Cell::text(key), cell]
                })
                .collect::<Vec<_>>();
            Ok(table::render(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![Cell::text(value_to_cell(&scalar))]];
            Ok(table::render(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value]) -> anyhow::Result<String> {
    let options = table_options();

    if items.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![Cell::text(value_to_cell(item))])
            .collect::<Vec<_>>();
        return Ok(table::render(&headers, &rows, options));
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return Ok(String::from("(no columns)"));
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| field_cell(header, map.get(header)))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(table::render(&header_refs, &rows, options))
}

/// Cell for one field of a record; absent and null values show as `-`.
fn field_cell(field: &str, value: Option<&Value>) -> Cell {
    match value.filter(|value| !value.is_null()) {
        Some(value) => Cell::new(field, value_to_cell(value)),
        None => Cell::text(String::from("-")),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
