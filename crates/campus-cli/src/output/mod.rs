use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod html;
pub mod report;
pub mod table;

use report::TitledTable;

/// Render a serializable response to a string in the requested format.
///
/// Table mode prints a key/value table for objects.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render `value` as JSON, or as `tables` in table mode.
pub fn render_with_tables<T: Serialize>(
    value: &T,
    tables: &[TitledTable],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_titled_tables(tables)),
        OutputFormat::Json | OutputFormat::Raw => render(value, format),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a response that has a dedicated table layout.
pub fn output_with_tables<T: Serialize>(
    value: &T,
    tables: &[TitledTable],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render_with_tables(value, tables, format)?;
    println!("{rendered}");
    Ok(())
}

/// Each table under its title, separated by a blank line.
#[must_use]
pub fn render_titled_tables(tables: &[TitledTable]) -> String {
    let options = table::TableOptions::from_env();
    tables
        .iter()
        .map(|t| {
            let body = if t.rows.is_empty() {
                String::from("(no rows)")
            } else {
                table::render_entity_table(&t.headers, &t.rows, options)
            };
            format!("{}\n{body}", t.title)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table::TableOptions::from_env();
    match serde_json::to_value(value)? {
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("None"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
