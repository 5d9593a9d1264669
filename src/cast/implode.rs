//! The bracketed level-tagged flattening grammar.
//!
//! Elements at nesting level L are joined by `" *{L}* "`; when a level
//! comes from a keyed container, each element is prefixed `"key [L] => "`.
//! The output is not meant for humans; it is reversible by [`explode`]
//! for containers whose leaves are strings.

use crate::value::{MapKey, Value};

const LEVEL_OPEN: &str = " *{";
const LEVEL_CLOSE: &str = "}* ";
const KEY_OPEN: &str = " [";
const KEY_CLOSE: &str = "] => ";

fn level_sep(level: usize) -> String {
    format!("{}{}{}", LEVEL_OPEN, level, LEVEL_CLOSE)
}

fn key_marker(level: usize) -> String {
    format!("{}{}{}", KEY_OPEN, level, KEY_CLOSE)
}

/// Flatten a container into a single delimited string. Arrays implode
/// positionally; maps carry their keys through the key tag. Non-container
/// scalars render via their canonical text.
pub(crate) fn implode(value: &Value) -> String {
    implode_at(value, 0)
}

fn implode_at(value: &Value, level: usize) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|v| leaf_or_descend(v, level))
            .collect::<Vec<_>>()
            .join(&level_sep(level)),
        Value::Map(entries) => entries
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}{}{}",
                    k.as_field_name(),
                    key_marker(level),
                    leaf_or_descend(v, level)
                )
            })
            .collect::<Vec<_>>()
            .join(&level_sep(level)),
        other => other.to_string(),
    }
}

fn leaf_or_descend(value: &Value, level: usize) -> String {
    if value.is_container() {
        implode_at(value, level + 1)
    } else {
        value.to_string()
    }
}

/// Rebuild a container from the implode grammar. A level whose pieces all
/// carry key tags becomes a `Map` (all-digit keys come back as integer
/// keys); an untagged level becomes an `Array`; leaves come back as `Str`.
/// Scalar leaves were flattened to text by [`implode`], so they return in
/// textual form.
pub fn explode(text: &str) -> Value {
    match explode_at(text, 0) {
        v @ (Value::Array(_) | Value::Map(_)) => v,
        leaf => Value::array(vec![leaf]),
    }
}

fn explode_at(text: &str, level: usize) -> Value {
    let sep = level_sep(level);
    let marker = key_marker(level);
    if !text.contains(&sep) && !text.contains(&marker) {
        return Value::Str(text.to_string());
    }
    let pieces: Vec<&str> = text.split(sep.as_str()).collect();
    if pieces.iter().all(|p| p.contains(&marker)) {
        Value::map(
            pieces
                .iter()
                .map(|p| {
                    let (key, rest) = p.split_once(&marker).expect("piece carries a key tag");
                    (parse_key(key), explode_at(rest, level + 1))
                })
                .collect(),
        )
    } else {
        Value::array(
            pieces
                .iter()
                .map(|p| explode_at(p, level + 1))
                .collect(),
        )
    }
}

fn parse_key(key: &str) -> MapKey {
    match key.parse::<i64>() {
        Ok(i) => MapKey::Int(i),
        Err(_) => MapKey::Str(key.to_string()),
    }
}
