//! Value representation shared by both sides of the interop boundary.
//!
//! A value is either native to the host runtime, boxed for foreign
//! consumption, or owned by the foreign side.

use crate::handle::{ForeignRef, ObjectId};
use crate::java_string::JavaString;
use crate::text::Text;
use std::fmt;

// ============================================================================
// Symbols
// ============================================================================

/// Identifier-like token. Carries the same characters as a string but is a
/// distinct kind on the native side.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Symbol(Text);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self(Text::from_str(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn text(&self) -> &Text {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol::new(value)
    }
}

// ============================================================================
// Value kinds
// ============================================================================

/// Values in the host runtime's own representation.
#[derive(Clone, Debug, PartialEq)]
pub enum Native {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Text),
    Symbol(Symbol),
    Object(ObjectId),
}

/// Content a box may hold: a scalar, or a string already in foreign form.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(JavaString),
}

/// A primitive wrapped for consumption by the foreign side.
#[derive(Clone, Debug, PartialEq)]
pub struct Boxed(Primitive);

impl Boxed {
    pub fn new(primitive: Primitive) -> Self {
        Self(primitive)
    }

    pub fn get(&self) -> &Primitive {
        &self.0
    }

    pub fn into_inner(self) -> Primitive {
        self.0
    }
}

/// Values owned by the foreign side.
#[derive(Clone, Debug, PartialEq)]
pub enum Foreign {
    String(JavaString),
    Object(ForeignRef),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Native(Native),
    Boxed(Boxed),
    Foreign(Foreign),
}

impl Value {
    pub fn nil() -> Self {
        Value::Native(Native::Nil)
    }

    pub fn bool(b: bool) -> Self {
        Value::Native(Native::Bool(b))
    }

    pub fn int(i: i64) -> Self {
        Value::Native(Native::Int(i))
    }

    pub fn float(f: f64) -> Self {
        Value::Native(Native::Float(f))
    }

    pub fn str(s: &str) -> Self {
        Value::Native(Native::Str(Text::from_str(s)))
    }

    pub fn text(t: Text) -> Self {
        Value::Native(Native::Str(t))
    }

    pub fn symbol(name: &str) -> Self {
        Value::Native(Native::Symbol(Symbol::new(name)))
    }

    pub fn object(id: ObjectId) -> Self {
        Value::Native(Native::Object(id))
    }

    pub fn foreign(object: ForeignRef) -> Self {
        Value::Foreign(Foreign::Object(object))
    }

    pub fn java_string(s: JavaString) -> Self {
        Value::Foreign(Foreign::String(s))
    }

    pub fn boxed(primitive: Primitive) -> Self {
        Value::Boxed(Boxed::new(primitive))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Native(Native::Nil))
    }

    #[inline]
    pub fn is_boxed(&self) -> bool {
        matches!(self, Value::Boxed(_))
    }

    /// True only for a bare foreign string, not one held inside a box.
    #[inline]
    pub fn is_java_string(&self) -> bool {
        matches!(self, Value::Foreign(Foreign::String(_)))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Native(Native::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Native(Native::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Native(Native::Float(f)) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::Native(Native::Str(t)) => Some(t),
            _ => None,
        }
    }

    pub fn as_java_string(&self) -> Option<&JavaString> {
        match self {
            Value::Foreign(Foreign::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_foreign(&self) -> Option<&ForeignRef> {
        match self {
            Value::Foreign(Foreign::Object(r)) => Some(r),
            _ => None,
        }
    }

    pub fn as_boxed(&self) -> Option<&Boxed> {
        match self {
            Value::Boxed(b) => Some(b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Native(n) => match n {
                Native::Nil => "Nil",
                Native::Bool(_) => "Boolean",
                Native::Int(_) => "Integer",
                Native::Float(_) => "Float",
                Native::Str(_) => "String",
                Native::Symbol(_) => "Symbol",
                Native::Object(_) => "Object",
            },
            Value::Boxed(_) => "Boxed",
            Value::Foreign(Foreign::String(_)) => "java.lang.String",
            Value::Foreign(Foreign::Object(_)) => "ForeignObject",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::str(value)
    }
}

impl From<Text> for Value {
    fn from(value: Text) -> Self {
        Value::text(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Native(Native::Symbol(value))
    }
}

impl From<ObjectId> for Value {
    fn from(value: ObjectId) -> Self {
        Value::object(value)
    }
}

impl From<ForeignRef> for Value {
    fn from(value: ForeignRef) -> Self {
        Value::foreign(value)
    }
}

impl From<JavaString> for Value {
    fn from(value: JavaString) -> Self {
        Value::java_string(value)
    }
}

impl From<Boxed> for Value {
    fn from(value: Boxed) -> Self {
        Value::Boxed(value)
    }
}

// ============================================================================
// Display
// ============================================================================

fn write_int(f: &mut fmt::Formatter<'_>, i: i64) -> fmt::Result {
    let mut buf = itoa::Buffer::new();
    f.write_str(buf.format(i))
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_finite() {
        let mut buf = ryu::Buffer::new();
        f.write_str(buf.format_finite(x))
    } else if x.is_nan() {
        f.write_str("NaN")
    } else if x > 0.0 {
        f.write_str("Infinity")
    } else {
        f.write_str("-Infinity")
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Primitive::Int(i) => write_int(f, *i),
            Primitive::Float(x) => write_float(f, *x),
            Primitive::String(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Native(n) => match n {
                Native::Nil => f.write_str("nil"),
                Native::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
                Native::Int(i) => write_int(f, *i),
                Native::Float(x) => write_float(f, *x),
                Native::Str(t) => f.write_str(t.as_str()),
                Native::Symbol(s) => write!(f, ":{}", s.as_str()),
                Native::Object(id) => write!(f, "#<Object {:#x}>", id.0),
            },
            Value::Boxed(b) => write!(f, "#<Boxed {}>", b.get()),
            Value::Foreign(Foreign::String(s)) => write!(f, "{s}"),
            Value::Foreign(Foreign::Object(r)) => write!(f, "#<Foreign {:#x}>", r.addr()),
        }
    }
}
