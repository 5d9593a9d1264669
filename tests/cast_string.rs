use indexmap::IndexMap;
use mikan::{cast, CastOptions, RecordData, RecordMethod, Value};

fn opts() -> CastOptions {
    CastOptions::default()
}

#[test]
fn strings_pass_through() {
    assert_eq!(cast(&Value::str("hello"), "string", &opts()), Some(Value::str("hello")));
    // no trimming on the string coercer
    assert_eq!(cast(&Value::str("  x  "), "string", &opts()), Some(Value::str("  x  ")));
}

#[test]
fn empty_string_honors_the_policy() {
    assert_eq!(cast(&Value::str(""), "string", &opts()), Some(Value::str("")));
    let strict = CastOptions {
        allow_empty: false,
        ..Default::default()
    };
    assert_eq!(cast(&Value::str(""), "string", &strict), None);
    assert_eq!(cast(&Value::str("x"), "string", &strict), Some(Value::str("x")));
}

#[test]
fn numbers_render_canonically() {
    assert_eq!(cast(&Value::Int(3), "string", &opts()), Some(Value::str("3")));
    assert_eq!(cast(&Value::Int(-12), "string", &opts()), Some(Value::str("-12")));
    assert_eq!(cast(&Value::Num(3.0), "string", &opts()), Some(Value::str("3")));
    assert_eq!(cast(&Value::Num(4.5), "string", &opts()), Some(Value::str("4.5")));
}

#[test]
fn booleans_are_not_strings() {
    assert_eq!(cast(&Value::Bool(true), "string", &opts()), None);
    assert_eq!(cast(&Value::Bool(false), "string", &opts()), None);
}

#[test]
fn containers_reject_without_implode_mode() {
    let v = Value::array(vec![Value::str("a"), Value::str("b")]);
    assert_eq!(cast(&v, "string", &opts()), None);
}

#[test]
fn implode_mode_flattens_containers() {
    let imploding = CastOptions {
        implode_containers: true,
        ..Default::default()
    };
    let v = Value::array(vec![Value::str("a"), Value::str("b")]);
    assert_eq!(cast(&v, "string", &imploding), Some(Value::str("a *{0}* b")));

    let keyed = Value::map_from(vec![("x", Value::str("a")), ("y", Value::str("b"))]);
    assert_eq!(
        cast(&keyed, "string", &imploding),
        Some(Value::str("x [0] => a *{0}* y [0] => b"))
    );

    // an empty container has nothing to implode
    assert_eq!(cast(&Value::array(vec![]), "string", &imploding), None);
}

#[test]
fn recursion_takes_priority_over_implode() {
    let both = CastOptions {
        container_as_unit: false,
        implode_containers: true,
        ..Default::default()
    };
    let v = Value::array(vec![Value::Int(1), Value::str("x")]);
    assert_eq!(
        cast(&v, "string", &both),
        Some(Value::array(vec![Value::str("1"), Value::str("x")]))
    );
}

#[test]
fn records_stringify_through_their_str_member() {
    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), Value::str("mikan"));
    let record = Value::record(RecordData::with_methods(
        fields,
        vec![RecordMethod::new(mikan::STR_METHOD, |data| {
            data.fields
                .get("name")
                .cloned()
                .unwrap_or_else(|| Value::str(""))
        })],
    ));
    assert_eq!(cast(&record, "string", &opts()), Some(Value::str("mikan")));
}

#[test]
fn records_without_str_member_reject() {
    let record = Value::record(RecordData::default());
    assert_eq!(cast(&record, "string", &opts()), None);

    // a member of the right name that yields a non-string is no better
    let odd = Value::record(RecordData::with_methods(
        IndexMap::new(),
        vec![RecordMethod::new(mikan::STR_METHOD, |_| Value::Int(1))],
    ));
    assert_eq!(cast(&odd, "string", &opts()), None);
}
