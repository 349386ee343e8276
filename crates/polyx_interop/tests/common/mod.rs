#![allow(dead_code)]

use polyx_core::{ForeignRef, Value};
use tracing_subscriber::EnvFilter;

/// Route `tracing` events to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Stand-in for an object owned by the foreign runtime.
#[derive(Debug)]
pub struct ForeignPoint {
    pub x: i32,
    pub y: i32,
}

pub fn foreign_object() -> ForeignRef {
    ForeignRef::new(ForeignPoint { x: 1, y: 2 })
}

pub fn same_reference(value: &Value, expected: &ForeignRef) -> bool {
    value.as_foreign().is_some_and(|r| r.ptr_eq(expected))
}
