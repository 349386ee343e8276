//! Standard interop methods over dynamic arguments.

use crate::convert;
use crate::errors::{InteropError, InteropResult};
use crate::names::Name;
use crate::table::ExportTable;
use polyx_core::Value;

fn expect_args<'a, const N: usize>(
    method: &str,
    args: &'a [Value],
) -> InteropResult<&'a [Value; N]> {
    args.try_into().map_err(|_| InteropError::Arity {
        method: method.to_string(),
        expected: N,
        found: args.len(),
    })
}

pub fn interop_export(table: &ExportTable, args: &[Value]) -> InteropResult<Value> {
    let [name, value] = expect_args::<2>("export", args)?;
    let name = Name::from_value(name, table.string_policy())?;
    table.export(name, value.clone());
    Ok(Value::nil())
}

pub fn interop_export_without_conversion(
    table: &ExportTable,
    args: &[Value],
) -> InteropResult<Value> {
    let [name, value] = expect_args::<2>("export_without_conversion", args)?;
    let name = Name::from_value(name, table.string_policy())?;
    table.export_without_conversion(name, value.clone());
    Ok(Value::nil())
}

pub fn interop_import(table: &ExportTable, args: &[Value]) -> InteropResult<Value> {
    let [name] = expect_args::<1>("import", args)?;
    let name = Name::from_value(name, table.string_policy())?;
    table.import(name)
}

pub fn interop_import_without_conversion(
    table: &ExportTable,
    args: &[Value],
) -> InteropResult<Value> {
    let [name] = expect_args::<1>("import_without_conversion", args)?;
    let name = Name::from_value(name, table.string_policy())?;
    table.import_without_conversion(name)
}

pub fn interop_is_boxed(_table: &ExportTable, args: &[Value]) -> InteropResult<Value> {
    let [value] = expect_args::<1>("boxed?", args)?;
    Ok(Value::bool(convert::is_boxed(value)))
}

pub fn interop_unbox(table: &ExportTable, args: &[Value]) -> InteropResult<Value> {
    let [value] = expect_args::<1>("unbox", args)?;
    table.unbox(value)
}

pub fn interop_unbox_without_conversion(
    _table: &ExportTable,
    args: &[Value],
) -> InteropResult<Value> {
    let [value] = expect_args::<1>("unbox_without_conversion", args)?;
    convert::unbox_without_conversion(value)
}

pub fn interop_is_java_string(_table: &ExportTable, args: &[Value]) -> InteropResult<Value> {
    let [value] = expect_args::<1>("java_string?", args)?;
    Ok(Value::bool(convert::is_java_string(value)))
}

pub fn interop_to_java_string(_table: &ExportTable, args: &[Value]) -> InteropResult<Value> {
    let [value] = expect_args::<1>("to_java_string", args)?;
    convert::value_to_java_string(value)
}

pub fn interop_from_java_string(table: &ExportTable, args: &[Value]) -> InteropResult<Value> {
    let [value] = expect_args::<1>("from_java_string", args)?;
    convert::value_from_java_string(value, table.string_policy())
}
