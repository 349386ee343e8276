//! Export/import registry for exchanging values between language runtimes.
//!
//! An [`ExportTable`] is owned by the embedder and shared (usually through
//! `Arc`) with every runtime that takes part in the exchange. Converting
//! exports box primitives and hand strings over in their foreign form;
//! converting imports undo both. The `_without_conversion` variants expose the
//! stored representation directly.
//!
//! ```
//! use polyx_core::{Symbol, Value};
//! use polyx_interop::{ExportTable, is_boxed};
//!
//! let table = ExportTable::new();
//! table.export("answer", Value::int(42));
//! assert_eq!(table.import(Symbol::new("answer")), Ok(Value::int(42)));
//! assert!(is_boxed(&table.import_without_conversion("answer").unwrap()));
//! ```

pub mod config;
pub mod convert;
pub mod errors;
pub mod methods;
pub mod names;
pub mod registry;
pub mod table;

pub use config::{InteropConfig, StringPolicy};
pub use convert::{
    from_java_string, is_boxed, is_java_string, to_java_string, unbox, unbox_without_conversion,
};
pub use errors::{InteropError, InteropResult};
pub use names::{Name, NameLike};
pub use registry::{InteropFn, InteropProvider, InteropRegistry, StdInteropProvider};
pub use table::ExportTable;
