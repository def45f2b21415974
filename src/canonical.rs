//! Canonical serialization of events and the truthiness rules used to pick a derivation path.
//!
//! Events arrive as loosely-typed JSON. Key derivation has to treat `null`, `false`, numeric zero
//! and the empty string as "absent", the same way a JavaScript producer of these keys would.
//! These predicates spell that rule out explicitly instead of leaning on implicit conversions.

use serde_json::Value;

/// Name of the event field holding an explicit partition key.
pub(crate) const PARTITION_KEY_FIELD: &str = "partitionKey";

/// Serialize `value` to its canonical string form.
///
/// This is compact JSON with object keys in sorted order, so logically equal values always
/// produce identical output. Integral floats are written as integers (`1.0` as `1`, `-0.0` as
/// `0`), matching how JavaScript prints numbers.
pub fn to_canonical_string(value: &Value) -> String {
    // Formatting a `Value` cannot fail: its map keys are always strings.
    normalize_numbers(value).to_string()
}

/// Largest magnitude up to which every integer is exactly representable as an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), normalize_numbers(item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Return `true` if `value` counts as falsy: `null`, `false`, zero or `""`.
///
/// Objects and arrays are never falsy, even when empty.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Return `true` if `event` is missing or falsy.
pub fn is_absent(event: Option<&Value>) -> bool {
    event.map_or(true, is_falsy)
}

/// Return the explicit partition key carried by `event`, if it has a truthy one.
///
/// Only objects can carry a key.
pub fn explicit_partition_key(event: &Value) -> Option<&Value> {
    event
        .as_object()?
        .get(PARTITION_KEY_FIELD)
        .filter(|value| !is_falsy(value))
}
