//! Conversion policy between native and foreign representations.

use crate::config::StringPolicy;
use crate::errors::{InteropError, InteropResult, messages};
use polyx_core::{Boxed, Foreign, JavaString, Native, Primitive, Text, Value};

/// What a converting export stores for `value`.
///
/// Scalars and strings are boxed, native strings and symbols are re-encoded as
/// Java strings first. Boxes, nil, native objects and foreign objects pass
/// through untouched.
pub fn to_foreign(value: Value) -> Value {
    match value {
        Value::Native(native) => match native {
            Native::Bool(b) => Value::boxed(Primitive::Bool(b)),
            Native::Int(i) => Value::boxed(Primitive::Int(i)),
            Native::Float(f) => Value::boxed(Primitive::Float(f)),
            Native::Str(t) => Value::boxed(Primitive::String(to_java_string(&t))),
            Native::Symbol(s) => Value::boxed(Primitive::String(to_java_string(s.text()))),
            other @ (Native::Nil | Native::Object(_)) => Value::Native(other),
        },
        Value::Foreign(Foreign::String(s)) => Value::boxed(Primitive::String(s)),
        other @ (Value::Boxed(_) | Value::Foreign(Foreign::Object(_))) => other,
    }
}

/// What a converting import hands back for a stored `value`.
pub fn to_native(value: Value, policy: StringPolicy) -> InteropResult<Value> {
    match value {
        Value::Boxed(b) => primitive_to_native(b.into_inner(), policy),
        Value::Foreign(Foreign::String(s)) => from_java_string(&s, policy).map(Value::text),
        other @ (Value::Native(_) | Value::Foreign(Foreign::Object(_))) => Ok(other),
    }
}

fn primitive_to_native(primitive: Primitive, policy: StringPolicy) -> InteropResult<Value> {
    Ok(match primitive {
        Primitive::Bool(b) => Value::bool(b),
        Primitive::Int(i) => Value::int(i),
        Primitive::Float(f) => Value::float(f),
        Primitive::String(s) => Value::text(from_java_string(&s, policy)?),
    })
}

fn primitive_to_value(primitive: Primitive) -> Value {
    match primitive {
        Primitive::Bool(b) => Value::bool(b),
        Primitive::Int(i) => Value::int(i),
        Primitive::Float(f) => Value::float(f),
        Primitive::String(s) => Value::java_string(s),
    }
}

pub fn is_boxed(value: &Value) -> bool {
    value.is_boxed()
}

pub fn is_java_string(value: &Value) -> bool {
    value.is_java_string()
}

fn expect_boxed(value: &Value) -> InteropResult<&Boxed> {
    value
        .as_boxed()
        .ok_or_else(|| InteropError::type_error(messages::NOT_BOXED, value.type_name()))
}

/// Contents of a box, with strings left in Java form.
pub fn unbox_without_conversion(value: &Value) -> InteropResult<Value> {
    let boxed = expect_boxed(value)?;
    Ok(primitive_to_value(boxed.get().clone()))
}

/// Contents of a box, with strings converted to native form.
pub fn unbox(value: &Value, policy: StringPolicy) -> InteropResult<Value> {
    let boxed = expect_boxed(value)?;
    primitive_to_native(boxed.get().clone(), policy)
}

pub fn to_java_string(s: &Text) -> JavaString {
    JavaString::from_text(s)
}

pub fn from_java_string(s: &JavaString, policy: StringPolicy) -> InteropResult<Text> {
    match policy {
        StringPolicy::Lossy => Ok(s.to_text_lossy()),
        StringPolicy::Strict => s.to_text().map_err(|_| {
            InteropError::type_error(messages::ILL_FORMED_JAVA_STRING, s.to_string())
        }),
    }
}

/// `to_java_string` for dynamic arguments. Symbols convert by name.
pub fn value_to_java_string(value: &Value) -> InteropResult<Value> {
    match value {
        Value::Native(Native::Str(t)) => Ok(Value::java_string(to_java_string(t))),
        Value::Native(Native::Symbol(s)) => Ok(Value::java_string(to_java_string(s.text()))),
        other => Err(InteropError::type_error(messages::NOT_A_STRING, other.type_name())),
    }
}

/// `from_java_string` for dynamic arguments.
pub fn value_from_java_string(value: &Value, policy: StringPolicy) -> InteropResult<Value> {
    match value {
        Value::Foreign(Foreign::String(s)) => from_java_string(s, policy).map(Value::text),
        other => Err(InteropError::type_error(messages::NOT_A_JAVA_STRING, other.type_name())),
    }
}
