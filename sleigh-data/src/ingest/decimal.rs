//! Decimal-comma number parsing for the semicolon CSV dialect.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Parse `raw` as a float, accepting `,` or `.` as the decimal separator.
pub(crate) fn parse(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse().ok()
}

/// `serde(deserialize_with)` adaptor for decimal-comma floats.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("`{raw}` is not a decimal number")))
}
