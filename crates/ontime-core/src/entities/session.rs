use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A scheduled study block `[start_hour, end_hour)` for one subject on one date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub subject_id: String,
    pub date: NaiveDate,
    #[serde(with = "crate::serde_compat::hour_string")]
    #[schemars(with = "String")]
    pub start_hour: u8,
    #[serde(with = "crate::serde_compat::hour_string")]
    #[schemars(with = "String")]
    pub end_hour: u8,
}

impl Session {
    /// Whether `[start, end)` intersects this session's block.
    #[must_use]
    pub const fn overlaps(&self, start: u8, end: u8) -> bool {
        start < self.end_hour && end > self.start_hour
    }
}
