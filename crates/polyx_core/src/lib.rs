//! Core value types for the polyx interop registry.
//!
//! This crate holds the representations both runtimes agree on:
//! - `Text` - Native string type with small string optimization
//! - `JavaString` - Foreign-native (UTF-16) string representation
//! - `Value` - Native, boxed and foreign values
//! - `ObjectId` / `ForeignRef` - Identity-preserving object references

pub mod handle;
pub mod java_string;
pub mod text;
pub mod value;

pub use handle::{ForeignRef, ObjectId};
pub use java_string::JavaString;
pub use text::Text;
pub use value::{Boxed, Foreign, Native, Primitive, Symbol, Value};
