use std::sync::Arc;

use indexmap::IndexMap;

mod display;

pub use display::canonical_num;

/// Key of a [`Value::Map`] entry. Incoming data may key entries by
/// position or by name, and the object coercer needs to tell the two
/// apart, so the distinction is kept rather than flattened to strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    Int(i64),
    Str(String),
}

impl MapKey {
    /// Textual form of the key, as used for record field names.
    pub fn as_field_name(&self) -> String {
        match self {
            MapKey::Int(i) => i.to_string(),
            MapKey::Str(s) => s.clone(),
        }
    }
}

impl From<i64> for MapKey {
    fn from(i: i64) -> Self {
        MapKey::Int(i)
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.to_string())
    }
}

/// An invocable member of a record. The body receives the record it is
/// attached to, so methods can derive their result from the fields.
#[derive(Clone)]
pub struct RecordMethod {
    pub name: String,
    body: Arc<dyn Fn(&RecordData) -> Value + Send + Sync>,
}

impl RecordMethod {
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&RecordData) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Arc::new(body),
        }
    }
}

impl std::fmt::Debug for RecordMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordMethod")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A structured record: named fields plus optionally invocable members.
#[derive(Debug, Clone, Default)]
pub struct RecordData {
    pub fields: IndexMap<String, Value>,
    pub methods: Vec<RecordMethod>,
}

impl RecordData {
    pub fn new(fields: IndexMap<String, Value>) -> Self {
        Self {
            fields,
            methods: Vec::new(),
        }
    }

    pub fn with_methods(fields: IndexMap<String, Value>, methods: Vec<RecordMethod>) -> Self {
        Self { fields, methods }
    }

    /// A record is empty when it exposes neither fields nor methods.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.methods.is_empty()
    }

    /// Invoke the member named `name`, if the record has one.
    pub fn invoke(&self, name: &str) -> Option<Value> {
        self.methods
            .iter()
            .find(|m| m.name == name)
            .map(|m| (m.body)(self))
    }
}

// Method bodies are opaque closures; two records are considered equal when
// their fields match and they expose the same member names.
impl PartialEq for RecordData {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
            && self.methods.len() == other.methods.len()
            && self
                .methods
                .iter()
                .zip(other.methods.iter())
                .all(|(a, b)| a.name == b.name)
    }
}

/// An arbitrarily-shaped runtime datum. Containers are `Array` and `Map`;
/// neither is assumed homogeneous.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Num(f64),
    Str(String),
    Array(Arc<Vec<Value>>),
    Map(Arc<IndexMap<MapKey, Value>>),
    Record(Arc<RecordData>),
    Nil,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // NaN compares equal to itself so containers holding NaN slots
            // can be compared structurally.
            (Value::Num(a), Value::Num(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ak, av), (bk, bv))| ak == bk && av == bv)
            }
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

impl Value {
    // ---- Arc-wrapping convenience constructors ----
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    pub fn map(entries: IndexMap<MapKey, Value>) -> Self {
        Value::Map(Arc::new(entries))
    }

    /// Build a Map from `(key, value)` pairs, keeping insertion order.
    pub fn map_from<K: Into<MapKey>>(entries: Vec<(K, Value)>) -> Self {
        Value::Map(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn record(data: RecordData) -> Self {
        Value::Record(Arc::new(data))
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Map(_))
    }

    /// Entry count for containers; `None` for anything else.
    pub fn container_len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Whether the value is acceptable to the `numeric` target type: an
    /// Int, a Num, or a string whose trimmed form reads as a plain decimal
    /// number (optional sign, optional fraction, optional exponent). The
    /// alphabetic float spellings (`inf`, `NaN`) and non-decimal bases are
    /// not numeric literals.
    pub fn is_numeric_literal(&self) -> bool {
        match self {
            Value::Int(_) | Value::Num(_) => true,
            Value::Str(s) => {
                let t = s.trim();
                !t.is_empty()
                    && !t
                        .chars()
                        .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
                    && t.parse::<f64>().is_ok()
            }
            _ => false,
        }
    }

    /// The legacy textual form a scalar takes when pushed through loose
    /// stringification: ints and nums render canonically, strings trim,
    /// and booleans become `"1"` / `""`. `None` for everything else.
    pub(crate) fn legacy_text(&self) -> Option<String> {
        match self {
            Value::Int(i) => Some(i.to_string()),
            Value::Num(f) => Some(canonical_num(*f)),
            Value::Str(s) => Some(s.trim().to_string()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Bool(false) => Some(String::new()),
            _ => None,
        }
    }
}

// Compile-time assertion that Value is Send + Sync
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
};
