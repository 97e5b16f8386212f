use anyhow::bail;
use ontime_schema::SchemaRegistry;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `ontime schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = args.type_name.as_deref() else {
        return output(&json!({ "schemas": registry.list() }), flags.format);
    };
    match registry.get(name) {
        Some(schema) => {
            println!("{}", serde_json::to_string_pretty(schema)?);
            Ok(())
        }
        None => bail!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        ),
    }
}
