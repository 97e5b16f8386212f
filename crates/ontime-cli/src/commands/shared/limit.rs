use ontime_config::GeneralConfig;
use serde_json::Value;

use crate::cli::GlobalFlags;

/// First rows of a list result, as many as the user asked for.
///
/// The subcommand's `--limit` beats the global `--limit`, which beats
/// `general.default_limit`. A limit of 0 keeps every row.
pub fn take_rows(
    listing: &Value,
    local: Option<u32>,
    flags: &GlobalFlags,
    general: &GeneralConfig,
) -> anyhow::Result<Vec<Value>> {
    let rows = listing.as_array().map_or(&[][..], Vec::as_slice);
    let limit = match local.or(flags.limit).unwrap_or(general.default_limit) {
        0 => rows.len(),
        limit => usize::try_from(limit)?,
    };
    Ok(rows.iter().take(limit).cloned().collect())
}
