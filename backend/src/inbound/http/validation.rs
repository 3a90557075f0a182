//! Shared request-shape helpers for inbound HTTP adapters.
//!
//! Booking-site forms post numbers as either JSON numbers or strings, and
//! browsers send missing text inputs as absent keys or `null`. These helpers
//! collapse those shapes before domain validation sees them.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Deserialise an optional integer sent as a number or a numeric string.
///
/// Anything that is not a whole number (blank strings, `"abc"`, `2.5`)
/// becomes `None`, which domain validation reports as a missing field.
pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        NumberOrText::Integer(number) => Some(number),
        NumberOrText::Float(number) => whole_number(number),
        NumberOrText::Text(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
        }
    }))
}

fn whole_number(number: f64) -> Option<i64> {
    // f64's Display never uses an exponent, so whole values print as digits
    // and anything fractional or out of range fails the parse.
    number.to_string().parse::<i64>().ok()
}

/// Deserialise an optional string, treating `null` like an absent key.
pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
