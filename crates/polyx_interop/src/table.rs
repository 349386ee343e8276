//! The export table: a shared name → value namespace.
//!
//! One runtime exports values under a name and another imports them. Every
//! access goes through [`Name`] canonicalization, so string and symbol forms of
//! a name hit the same binding. Conversion runs outside the lock; the lock only
//! covers the map insert or the lookup, which keeps each binding's replacement
//! atomic with respect to readers.

use crate::config::{InteropConfig, StringPolicy};
use crate::convert;
use crate::errors::{InteropError, InteropResult};
use crate::names::{Name, NameLike};
use ahash::RandomState;
use indexmap::IndexMap;
use parking_lot::RwLock;
use polyx_core::{JavaString, Text, Value};
use std::sync::Arc;
use tracing::{debug, trace};

type Bindings = IndexMap<Name, Value, RandomState>;

pub struct ExportTable {
    config: InteropConfig,
    bindings: RwLock<Bindings>,
}

impl ExportTable {
    pub fn new() -> Self {
        Self::with_config(InteropConfig::default())
    }

    pub fn with_config(config: InteropConfig) -> Self {
        let bindings =
            IndexMap::with_capacity_and_hasher(config.initial_capacity, RandomState::new());
        Self {
            config,
            bindings: RwLock::new(bindings),
        }
    }

    /// A table ready to be handed to several runtimes.
    pub fn shared(config: InteropConfig) -> Arc<Self> {
        Arc::new(Self::with_config(config))
    }

    pub fn config(&self) -> &InteropConfig {
        &self.config
    }

    pub fn string_policy(&self) -> StringPolicy {
        self.config.strings
    }

    /// Export `value` under `name`, boxing primitives and strings.
    pub fn export(&self, name: impl NameLike, value: Value) {
        let name = name.to_name();
        let stored = convert::to_foreign(value);
        self.store(name, stored, true);
    }

    /// Export `value` under `name` exactly as given.
    pub fn export_without_conversion(&self, name: impl NameLike, value: Value) {
        let name = name.to_name();
        self.store(name, value, false);
    }

    fn store(&self, name: Name, value: Value, converted: bool) {
        let kind = value.type_name();
        let previous = self.bindings.write().insert(name.clone(), value);
        debug!(
            name = name.as_str(),
            kind,
            converted,
            overwrite = previous.is_some(),
            "export"
        );
    }

    /// Import the value bound to `name`, unboxing and converting strings.
    pub fn import(&self, name: impl NameLike) -> InteropResult<Value> {
        let name = name.to_name();
        let stored = self.lookup(&name)?;
        trace!(name = name.as_str(), kind = stored.type_name(), converted = true, "import");
        convert::to_native(stored, self.config.strings)
    }

    /// Import the value bound to `name` as stored.
    pub fn import_without_conversion(&self, name: impl NameLike) -> InteropResult<Value> {
        let name = name.to_name();
        let stored = self.lookup(&name)?;
        trace!(name = name.as_str(), kind = stored.type_name(), converted = false, "import");
        Ok(stored)
    }

    fn lookup(&self, name: &Name) -> InteropResult<Value> {
        let found = self.bindings.read().get(name).cloned();
        found.ok_or_else(|| {
            debug!(name = name.as_str(), "import of unbound name");
            InteropError::not_found(name.as_str())
        })
    }

    pub fn contains(&self, name: impl NameLike) -> bool {
        self.bindings.read().contains_key(&name.to_name())
    }

    /// Bound names in first-export order.
    pub fn names(&self) -> Vec<Name> {
        self.bindings.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }

    /// `unbox` under this table's string policy.
    pub fn unbox(&self, value: &Value) -> InteropResult<Value> {
        convert::unbox(value, self.config.strings)
    }

    /// `from_java_string` under this table's string policy.
    pub fn from_java_string(&self, s: &JavaString) -> InteropResult<Text> {
        convert::from_java_string(s, self.config.strings)
    }
}

impl Default for ExportTable {
    fn default() -> Self {
        Self::new()
    }
}
