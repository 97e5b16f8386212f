//! Lenient serde adapters for documents written by the browser version.
//!
//! The browser stored `""` for "no subject" and "no due date", and kept
//! session hours and the reminder window as decimal strings. These adapters
//! read both the old and the current shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// `null`, `""` and missing all read as `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// `null`, `""` and missing all read as `None`; anything else must be `YYYY-MM-DD`.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Hours persist as decimal strings (`"9"`) and read from strings or numbers.
pub mod hour_string {
    use super::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawHour {
        Text(String),
        Number(u64),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(hour: &u8, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hour.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawHour::deserialize(deserializer)? {
            RawHour::Text(s) => s
                .trim()
                .parse::<u8>()
                .map_err(|e| serde::de::Error::custom(format!("invalid hour '{s}': {e}"))),
            RawHour::Number(n) => u8::try_from(n)
                .map_err(|_| serde::de::Error::custom(format!("hour {n} out of range"))),
        }
    }
}

/// Reads a day count the way the browser did (`parseInt(v) || 0`).
///
/// Numbers and numeric prefixes of strings count; anything else reads as `0`,
/// which the settings treat as "use the default window".
pub fn lenient_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDays {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let days = match RawDays::deserialize(deserializer)? {
        RawDays::Number(n) if n.is_finite() && n >= 1.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let whole = n.trunc().min(f64::from(u32::MAX)) as u32;
            whole
        }
        RawDays::Text(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<u32>().unwrap_or(0)
        }
        RawDays::Number(_) | RawDays::Other(_) => 0,
    };
    Ok(days)
}
