//! Forgiving deserializers for fields the portal API does not always fill in.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) const MAX_SCORE: u8 = 100;

/// `null` and missing both become `T::default()`
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_score(&value))
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match as_number(&value) {
        Some(n) => n.max(0.0).min(u32::MAX as f64) as u32,
        None => {
            if !value.is_null() {
                log::warn!("ignoring malformed count: {}", value);
            }
            0
        }
    };
    Ok(count)
}

/// Money and year amounts: numbers, numeric strings and floats are accepted,
/// anything else reads as unknown.
pub(crate) fn optional_amount<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = as_number(&value).map(|n| n.max(0.0).min(u64::MAX as f64).round() as u64);
    if amount.is_none() && !value.is_null() {
        log::warn!("ignoring malformed amount: {}", value);
    }
    Ok(amount)
}

/// Optional nested object. Anything that is not an object, or an object
/// that does not fit `T`, becomes `None` instead of failing the parent.
pub(crate) fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        if !value.is_null() {
            log::warn!("expected an object, ignoring {}", value);
        }
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            log::warn!("ignoring malformed object: {}", e);
            Ok(None)
        }
    }
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::String(raw) => match raw.parse::<NaiveDateTime>() {
            Ok(ts) => Some(ts),
            Err(e) => {
                log::debug!("unparseable timestamp '{}': {}", raw, e);
                None
            }
        },
        _ => None,
    };
    Ok(parsed)
}

/// Reads a score from whatever the server sent and pins it to 0..=100.
/// Anything that is not a number, or a string holding one, scores 0.
pub(crate) fn coerce_score(value: &Value) -> u8 {
    match as_number(value) {
        Some(n) => n.round().clamp(0.0, MAX_SCORE as f64) as u8,
        None => {
            log::warn!("non-numeric match score {}, using 0", value);
            0
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}
