//! mikan — policy-driven coercion of dynamic values to fixed target types.
//!
//! Values arriving from form input, config files or loosely-typed data
//! interchange have no reliable static type. [`cast`] takes such a
//! [`Value`] and a target type tag and either produces a value of that
//! type under explicit, deterministic rules, or reports that no valid
//! coercion exists. Absence of a result is an ordinary outcome, returned
//! as `None`; the engine never panics and never raises.
//!
//! ```
//! use mikan::{cast, CastOptions, Value};
//!
//! let options = CastOptions::default();
//! assert_eq!(cast(&Value::str("yes"), "bool", &options), Some(Value::Bool(true)));
//! assert_eq!(cast(&Value::str("007"), "int", &options), Some(Value::Int(7)));
//! assert_eq!(cast(&Value::str("maybe"), "bool", &options), None);
//! ```

pub mod cast;
pub mod value;

pub use cast::{cast, explode, CastOptions, TypeTag, STR_METHOD};
pub use value::{canonical_num, MapKey, RecordData, RecordMethod, Value};
