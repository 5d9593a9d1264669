use std::sync::OnceLock;

use num_traits::ToPrimitive;
use regex::Regex;

use super::container::recurse;
use super::{CastOptions, STR_METHOD};
use crate::value::{canonical_num, Value};

// Exact, case-sensitive word sets for boolean string coercion.
const TRUE_WORDS: [&str; 12] = [
    "1", "true", "True", "TRUE", "y", "Y", "yes", "Yes", "YES", "on", "On", "ON",
];
const FALSE_WORDS: [&str; 12] = [
    "0", "false", "False", "FALSE", "n", "N", "no", "No", "NO", "off", "Off", "OFF",
];

fn int_pattern() -> &'static Regex {
    static INT_RE: OnceLock<Regex> = OnceLock::new();
    // All-digit with a single optional leading minus; no `+`, no
    // separators. Leading zeros are accepted and parsed as decimal.
    INT_RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("int pattern is valid"))
}

pub(crate) fn cast_bool(value: &Value, options: &CastOptions) -> Option<Value> {
    match value {
        Value::Bool(b) => Some(Value::Bool(*b)),
        Value::Int(0) => Some(Value::Bool(false)),
        Value::Int(1) => Some(Value::Bool(true)),
        Value::Num(f) if !f.is_nan() && (*f == 0.0 || *f == 1.0) => Some(Value::Bool(*f == 1.0)),
        Value::Str(s) => {
            let t = s.trim();
            if TRUE_WORDS.contains(&t) {
                Some(Value::Bool(true))
            } else if FALSE_WORDS.contains(&t) {
                Some(Value::Bool(false))
            } else {
                None
            }
        }
        Value::Array(_) | Value::Map(_) if !options.container_as_unit => {
            recurse(value, options.allow_empty, cast_bool)
        }
        _ => None,
    }
}

// Booleans are deliberately not accepted here, even though the boolean
// coercer accepts ints and floats; the asymmetry is part of the contract.
pub(crate) fn cast_int(value: &Value, options: &CastOptions) -> Option<Value> {
    match value {
        Value::Int(i) => Some(Value::Int(*i)),
        // Fractional and NaN floats are rejected, never rounded. A float
        // whose truncation does not fit i64 is rejected as well.
        Value::Num(f) if !f.is_nan() && f.fract() == 0.0 => f.to_i64().map(Value::Int),
        Value::Str(s) => {
            let t = s.trim();
            if t.is_empty() || !int_pattern().is_match(t) {
                return None;
            }
            // Digit strings beyond i64 range fail the parse and are
            // rejected rather than wrapped.
            t.parse::<i64>().ok().map(Value::Int)
        }
        Value::Array(_) | Value::Map(_) if !options.container_as_unit => {
            recurse(value, options.allow_empty, cast_int)
        }
        _ => None,
    }
}

pub(crate) fn cast_float(value: &Value, options: &CastOptions) -> Option<Value> {
    match value {
        Value::Num(f) => Some(Value::Num(*f)),
        Value::Array(_) | Value::Map(_) if !options.container_as_unit => {
            recurse(value, options.allow_empty, cast_float)
        }
        Value::Int(_) | Value::Str(_) | Value::Bool(_) => {
            numeric_round_trip(&value.legacy_text()?).map(Value::Num)
        }
        _ => None,
    }
}

// Accept only text whose canonical re-rendering equals the input: this
// admits bare integers and canonical decimal floats and nothing whose
// meaning would drift through a parse/format cycle.
fn numeric_round_trip(text: &str) -> Option<f64> {
    if text.is_empty()
        || text
            .chars()
            .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }
    let f = text.parse::<f64>().ok()?;
    if canonical_num(f) == text {
        Some(f)
    } else {
        None
    }
}

pub(crate) fn cast_str(value: &Value, options: &CastOptions) -> Option<Value> {
    match value {
        Value::Str(s) => {
            if !s.is_empty() || options.allow_empty {
                Some(value.clone())
            } else {
                None
            }
        }
        Value::Int(i) => Some(Value::Str(i.to_string())),
        Value::Num(f) => Some(Value::Str(canonical_num(*f))),
        Value::Array(_) | Value::Map(_) => {
            if !options.container_as_unit {
                recurse(value, options.allow_empty, cast_str)
            } else if options.implode_containers && value.container_len() != Some(0) {
                Some(Value::Str(super::implode::implode(value)))
            } else {
                None
            }
        }
        Value::Record(data) => match data.invoke(STR_METHOD) {
            Some(Value::Str(s)) => Some(Value::Str(s)),
            _ => None,
        },
        _ => None,
    }
}
