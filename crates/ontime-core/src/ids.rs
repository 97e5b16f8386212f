//! ID prefix constants and generation.
//!
//! New records get `"{prefix}-{8 hex chars}"`, e.g. `"tsk-a3f8b2c1"`. IDs read
//! back from storage are opaque strings and are never rewritten, so documents
//! written by older versions keep their original identifiers.

use std::fmt::Write as _;

use crate::errors::CoreError;

pub const PREFIX_SUBJECT: &str = "sub";
pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_SESSION: &str = "ses";

/// Generate a prefixed ID from 4 random bytes.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;

    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    Ok(id)
}
