//! Fixed color palettes for subjects and analytics slices.

/// Subject colors, assigned round-robin at creation time.
pub const SUBJECT_COLORS: [&str; 8] = [
    "#0d9488", "#2563eb", "#ea580c", "#e11d48", "#7c3aed", "#059669", "#d97706", "#0284c7",
];

pub const STATUS_COMPLETED_COLOR: &str = "#16a34a";
pub const STATUS_IN_PROGRESS_COLOR: &str = "#f59e0b";
pub const STATUS_PENDING_COLOR: &str = "#94a3b8";

/// Color for the subject created when `existing` subjects are already stored.
///
/// Indexed by collection size, so colors shift after deletions.
#[must_use]
pub const fn subject_color(existing: usize) -> &'static str {
    SUBJECT_COLORS[existing % SUBJECT_COLORS.len()]
}
