use num_traits::ToPrimitive;

use crate::value::Value;

mod container;
mod implode;
mod scalar;

pub use implode::explode;

/// Name of the invocable record member the string coercer falls back to.
pub const STR_METHOD: &str = "Str";

/// The closed set of supported target types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Numeric,
    Str,
    Array,
    Object,
}

impl TypeTag {
    /// Normalize a requested tag: trim, lowercase, then match against the
    /// fixed set. `integer`/`int`, `boolean`/`bool` and `num`/`numeric`
    /// are synonym spellings. Anything else is simply not a tag.
    pub fn parse(tag: &str) -> Option<TypeTag> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Some(TypeTag::Bool),
            "int" | "integer" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            "num" | "numeric" => Some(TypeTag::Numeric),
            "string" => Some(TypeTag::Str),
            "array" => Some(TypeTag::Array),
            "object" => Some(TypeTag::Object),
            _ => None,
        }
    }
}

/// Options steering a coercion. All fields are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastOptions {
    /// When false, an empty string / container / member-less record
    /// coerces to no result instead of to the empty value.
    pub allow_empty: bool,
    /// When true (the default), a container presented to a scalar coercer
    /// yields no result; when false, the coercer descends element-wise.
    pub container_as_unit: bool,
    /// When true, a container coerced to string flattens through the
    /// bracketed level-tagged grammar instead of failing.
    pub implode_containers: bool,
}

impl Default for CastOptions {
    fn default() -> Self {
        Self {
            allow_empty: true,
            container_as_unit: true,
            implode_containers: false,
        }
    }
}

/// Coerce `value` to the type named by `type_tag` under `options`.
///
/// Returns `None` when no valid coercion exists; an unsupported tag or a
/// `Nil` value is reported the same way. This never panics and never
/// distinguishes failure reasons.
pub fn cast(value: &Value, type_tag: &str, options: &CastOptions) -> Option<Value> {
    if matches!(value, Value::Nil) {
        return None;
    }
    match TypeTag::parse(type_tag)? {
        TypeTag::Bool => scalar::cast_bool(value, options),
        TypeTag::Int => scalar::cast_int(value, options),
        TypeTag::Float => scalar::cast_float(value, options),
        TypeTag::Numeric => cast_numeric(value),
        TypeTag::Str => scalar::cast_str(value, options),
        TypeTag::Array => container::cast_array(value, options),
        TypeTag::Object => container::cast_object(value, options),
    }
}

// The one place the engine picks between two result types based on the
// value's own shape: integral numerics come back as Int, the rest as Num.
fn cast_numeric(value: &Value) -> Option<Value> {
    if !value.is_numeric_literal() {
        return None;
    }
    match value {
        Value::Int(i) => Some(Value::Int(*i)),
        Value::Num(f) => Some(narrow_num(*f)),
        Value::Str(s) => s.trim().parse::<f64>().ok().map(narrow_num),
        _ => None,
    }
}

fn narrow_num(f: f64) -> Value {
    if f.fract() == 0.0 {
        if let Some(i) = f.to_i64() {
            return Value::Int(i);
        }
    }
    Value::Num(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_spellings_normalize() {
        assert_eq!(TypeTag::parse(" Integer "), Some(TypeTag::Int));
        assert_eq!(TypeTag::parse("BOOLEAN"), Some(TypeTag::Bool));
        assert_eq!(TypeTag::parse("num"), Some(TypeTag::Numeric));
        assert_eq!(TypeTag::parse("numeric"), Some(TypeTag::Numeric));
        assert_eq!(TypeTag::parse("string"), Some(TypeTag::Str));
    }

    #[test]
    fn unknown_tags_are_not_tags() {
        assert_eq!(TypeTag::parse("str"), None);
        assert_eq!(TypeTag::parse("double"), None);
        assert_eq!(TypeTag::parse(""), None);
        assert_eq!(TypeTag::parse("null"), None);
    }

    #[test]
    fn narrow_num_keeps_non_integral_floats() {
        assert_eq!(narrow_num(4.0), Value::Int(4));
        assert_eq!(narrow_num(4.5), Value::Num(4.5));
        assert_eq!(narrow_num(f64::NAN), Value::Num(f64::NAN));
        assert_eq!(narrow_num(1e300), Value::Num(1e300));
    }
}
