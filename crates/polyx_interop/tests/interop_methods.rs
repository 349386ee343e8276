mod common;

use common::{foreign_object, init_tracing, same_reference};
use polyx_core::{JavaString, Value};
use polyx_interop::{
    ExportTable, InteropConfig, InteropError, InteropProvider, InteropRegistry, InteropResult,
    StringPolicy,
};

fn call(registry: &InteropRegistry, table: &ExportTable, name: &str, args: &[Value]) -> Value {
    registry
        .call(table, name, args)
        .unwrap_or_else(|e| panic!("{name} failed: {e}"))
}

#[test]
fn standard_methods_are_installed() {
    let registry = InteropRegistry::standard();
    assert_eq!(
        registry.names(),
        [
            "boxed?",
            "export",
            "export_without_conversion",
            "from_java_string",
            "import",
            "import_without_conversion",
            "java_string?",
            "to_java_string",
            "unbox",
            "unbox_without_conversion",
        ]
    );
}

#[test]
fn string_round_trip_through_methods() {
    init_tracing();
    let registry = InteropRegistry::standard();
    let table = ExportTable::new();

    let ret = call(&registry, &table, "export", &[Value::symbol("greeting"), Value::str("hello")]);
    assert!(ret.is_nil());

    let raw = call(&registry, &table, "import_without_conversion", &[Value::str("greeting")]);
    assert_eq!(call(&registry, &table, "boxed?", &[raw.clone()]), Value::bool(true));

    let inner = call(&registry, &table, "unbox_without_conversion", &[raw.clone()]);
    assert_eq!(call(&registry, &table, "java_string?", &[inner.clone()]), Value::bool(true));
    assert_eq!(
        call(&registry, &table, "from_java_string", &[inner]),
        Value::str("hello")
    );
    assert_eq!(call(&registry, &table, "unbox", &[raw]), Value::str("hello"));
    assert_eq!(
        call(&registry, &table, "import", &[Value::symbol("greeting")]),
        Value::str("hello")
    );
}

#[test]
fn export_without_conversion_through_methods() {
    let registry = InteropRegistry::standard();
    let table = ExportTable::new();
    call(
        &registry,
        &table,
        "export_without_conversion",
        &[Value::str("plain"), Value::str("hello")],
    );
    let raw = call(&registry, &table, "import_without_conversion", &[Value::symbol("plain")]);
    assert_eq!(call(&registry, &table, "java_string?", &[raw.clone()]), Value::bool(false));
    assert_eq!(raw, Value::str("hello"));
}

#[test]
fn java_string_names_resolve_like_strings() {
    let registry = InteropRegistry::standard();
    let table = ExportTable::new();
    let object = foreign_object();
    let name = Value::java_string(JavaString::encode("shared"));
    call(&registry, &table, "export", &[name, Value::foreign(object.clone())]);
    let back = call(&registry, &table, "import", &[Value::str("shared")]);
    assert!(same_reference(&back, &object));
}

#[test]
fn to_java_string_accepts_strings_and_symbols() {
    let registry = InteropRegistry::standard();
    let table = ExportTable::new();
    let a = call(&registry, &table, "to_java_string", &[Value::str("abc")]);
    let b = call(&registry, &table, "to_java_string", &[Value::symbol("abc")]);
    assert_eq!(a, b);
    assert!(a.is_java_string());
}

#[test]
fn method_errors() {
    let registry = InteropRegistry::standard();
    let table = ExportTable::new();

    let err = registry.call(&table, "import", &[Value::str("nope")]).unwrap_err();
    assert!(err.is_not_found());

    let err = registry.call(&table, "import", &[Value::int(1)]).unwrap_err();
    assert!(err.is_type_error());

    let err = registry.call(&table, "unbox_without_conversion", &[Value::int(1)]).unwrap_err();
    assert!(err.is_type_error());

    let err = registry.call(&table, "to_java_string", &[Value::int(1)]).unwrap_err();
    assert!(err.is_type_error());

    let err = registry.call(&table, "from_java_string", &[Value::str("native")]).unwrap_err();
    assert!(err.is_type_error());

    let err = registry.call(&table, "export", &[Value::str("only_name")]).unwrap_err();
    assert_eq!(
        err,
        InteropError::Arity {
            method: "export".into(),
            expected: 2,
            found: 1
        }
    );

    let err = registry.call(&table, "eval", &[]).unwrap_err();
    assert_eq!(err, InteropError::UnknownMethod("eval".into()));
    assert!(table.is_empty());
}

fn interop_count(table: &ExportTable, _args: &[Value]) -> InteropResult<Value> {
    Ok(Value::int(table.len() as i64))
}

struct CountProvider;

impl InteropProvider for CountProvider {
    fn install(&self, registry: &mut InteropRegistry) {
        registry.register("count", interop_count);
    }
}

#[test]
fn custom_providers_extend_the_registry() {
    let mut registry = InteropRegistry::standard();
    CountProvider.install(&mut registry);
    let table = ExportTable::new();
    call(&registry, &table, "export", &[Value::str("x"), Value::int(1)]);
    assert_eq!(call(&registry, &table, "count", &[]), Value::int(1));
}

#[test]
fn strict_table_refuses_ill_formed_java_names() {
    let registry = InteropRegistry::standard();
    let table = ExportTable::with_config(InteropConfig {
        strings: StringPolicy::Strict,
        ..InteropConfig::default()
    });
    let high = Value::java_string(JavaString::from_units(&[0x61, 0xD800]));
    let low = Value::java_string(JavaString::from_units(&[0x61, 0xDC00]));

    let err = registry.call(&table, "export", &[high.clone(), Value::int(1)]).unwrap_err();
    assert!(err.is_type_error());
    let err = registry.call(&table, "export", &[low, Value::int(2)]).unwrap_err();
    assert!(err.is_type_error());
    let err = registry.call(&table, "import", &[high]).unwrap_err();
    assert!(err.is_type_error());
    assert!(table.is_empty());
}

#[test]
fn lossy_table_decodes_java_names_with_replacement() {
    let registry = InteropRegistry::standard();
    let table = ExportTable::new();
    let name = Value::java_string(JavaString::from_units(&[0x61, 0xD800]));
    call(&registry, &table, "export", &[name, Value::int(1)]);
    assert_eq!(table.import("a\u{FFFD}"), Ok(Value::int(1)));
}
