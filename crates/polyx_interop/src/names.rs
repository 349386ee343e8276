//! Binding names.
//!
//! Callers name a binding with either a string or a symbol. Both surface forms
//! reduce to the same canonical `Name`, so `:x` and `"x"` are one binding.

use crate::config::StringPolicy;
use crate::convert;
use crate::errors::{InteropError, InteropResult, messages};
use polyx_core::{Foreign, Native, Symbol, Text, Value};
use std::borrow::Borrow;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(Text);

impl Name {
    /// The single canonicalization applied before every lookup and insert.
    pub fn canonicalize(chars: &str) -> Self {
        Name(Text::from_str(chars))
    }

    /// Names taken from dynamic arguments: strings, symbols or Java strings.
    /// Java strings are decoded under `policy`.
    pub fn from_value(value: &Value, policy: StringPolicy) -> InteropResult<Self> {
        match value {
            Value::Native(Native::Str(t)) => Ok(Name(t.clone())),
            Value::Native(Native::Symbol(s)) => Ok(Name(s.text().clone())),
            Value::Foreign(Foreign::String(s)) => convert::from_java_string(s, policy).map(Name),
            other => Err(InteropError::type_error(messages::NOT_A_NAME, other.type_name())),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Anything that can name a binding.
pub trait NameLike {
    fn to_name(&self) -> Name;
}

impl NameLike for Name {
    fn to_name(&self) -> Name {
        self.clone()
    }
}

impl NameLike for str {
    fn to_name(&self) -> Name {
        Name::canonicalize(self)
    }
}

impl NameLike for String {
    fn to_name(&self) -> Name {
        Name::canonicalize(self)
    }
}

impl NameLike for Text {
    fn to_name(&self) -> Name {
        Name(self.clone())
    }
}

impl NameLike for Symbol {
    fn to_name(&self) -> Name {
        Name(self.text().clone())
    }
}

impl<T: NameLike + ?Sized> NameLike for &T {
    fn to_name(&self) -> Name {
        (**self).to_name()
    }
}
