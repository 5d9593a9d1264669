use std::fmt;

use super::Value;

/// Canonical decimal rendering of a float: the minimal form that parses
/// back to the same value, with no `.0` suffix on integral values.
pub fn canonical_num(f: f64) -> String {
    format!("{}", f)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Num(n) => write!(f, "{}", canonical_num(*n)),
            Value::Str(s) => write!(f, "{}", s),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", parts.join(" "))
            }
            Value::Map(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{} => {}", k.as_field_name(), v))
                    .collect();
                write!(f, "{}", parts.join(" "))
            }
            Value::Record(data) => {
                let parts: Vec<String> = data
                    .fields
                    .iter()
                    .map(|(k, v)| format!("{} => {}", k, v))
                    .collect();
                write!(f, "{}", parts.join(" "))
            }
            Value::Nil => write!(f, "Nil"),
        }
    }
}
