use std::io::IsTerminal;

use anyhow::bail;
use dialoguer::Confirm;

use crate::cli::GlobalFlags;

/// Ask before a destructive action.
///
/// Skipped (answered yes) with `--yes` or when `required` is false.
/// Without a terminal to ask on, the action is refused.
pub fn confirm(prompt: &str, required: bool, flags: &GlobalFlags) -> anyhow::Result<bool> {
    if flags.yes || !required {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        bail!("confirmation required: {prompt} (pass --yes to skip)");
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
