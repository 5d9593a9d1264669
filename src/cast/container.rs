use std::sync::Arc;

use indexmap::IndexMap;

use super::CastOptions;
use crate::value::{MapKey, RecordData, Value};

/// Field name given to a scalar wrapped into a record by the object
/// coercer.
pub(crate) const SCALAR_FIELD: &str = "scalar";

pub(crate) fn cast_array(value: &Value, options: &CastOptions) -> Option<Value> {
    let out = match value {
        Value::Array(_) | Value::Map(_) => value.clone(),
        // Records convert field-by-field, keeping the field names as keys.
        Value::Record(data) => Value::Map(Arc::new(
            data.fields
                .iter()
                .map(|(k, v)| (MapKey::Str(k.clone()), v.clone()))
                .collect(),
        )),
        other => Value::array(vec![other.clone()]),
    };
    if out.container_len() == Some(0) && !options.allow_empty {
        None
    } else {
        Some(out)
    }
}

pub(crate) fn cast_object(value: &Value, options: &CastOptions) -> Option<Value> {
    let data: Arc<RecordData> = match value {
        Value::Record(data) => data.clone(),
        // Every entry becomes a named field using the key's textual form,
        // integer keys included, so no entry is silently dropped.
        Value::Map(entries) => Arc::new(RecordData::new(
            entries
                .iter()
                .map(|(k, v)| (k.as_field_name(), v.clone()))
                .collect(),
        )),
        Value::Array(items) => Arc::new(RecordData::new(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect(),
        )),
        other => {
            let mut fields = IndexMap::new();
            fields.insert(SCALAR_FIELD.to_string(), other.clone());
            Arc::new(RecordData::new(fields))
        }
    };
    if !options.allow_empty && data.is_empty() {
        None
    } else {
        Some(Value::Record(data))
    }
}

/// Apply `coerce` to every element of a container independently, with
/// containers-as-unit forced for the elements. An element that fails to
/// coerce keeps its slot as `Nil`; the container shape, length and keys
/// are preserved either way. This partial-failure mode is intentional:
/// callers get a container back whenever the input container was
/// non-empty, and inspect the slots themselves.
pub(crate) fn recurse<F>(value: &Value, allow_empty: bool, coerce: F) -> Option<Value>
where
    F: Fn(&Value, &CastOptions) -> Option<Value>,
{
    let element_options = CastOptions {
        allow_empty,
        container_as_unit: true,
        implode_containers: false,
    };
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return allow_empty.then(|| value.clone());
            }
            Some(Value::array(
                items
                    .iter()
                    .map(|v| coerce(v, &element_options).unwrap_or(Value::Nil))
                    .collect(),
            ))
        }
        Value::Map(entries) => {
            if entries.is_empty() {
                return allow_empty.then(|| value.clone());
            }
            Some(Value::map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), coerce(v, &element_options).unwrap_or(Value::Nil)))
                    .collect(),
            ))
        }
        _ => None,
    }
}
