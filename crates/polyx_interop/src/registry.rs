use crate::errors::{InteropError, InteropResult};
use crate::methods;
use crate::table::ExportTable;
use ahash::RandomState;
use hashbrown::HashMap;
use polyx_core::Value;

pub type InteropFn = fn(&ExportTable, &[Value]) -> InteropResult<Value>;

pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// Interop methods callable by name, the surface a host runtime binds its
/// `Interop` module to.
pub struct InteropRegistry {
    entries: FastHashMap<String, InteropFn>,
}

impl InteropRegistry {
    pub fn new() -> Self {
        Self {
            entries: FastHashMap::default(),
        }
    }

    /// Registry with every standard method installed.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        StdInteropProvider.install(&mut registry);
        registry
    }

    pub fn register(&mut self, name: &str, fun: InteropFn) {
        self.entries.insert(name.to_string(), fun);
    }

    pub fn get(&self, name: &str) -> Option<InteropFn> {
        self.entries.get(name).copied()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn call(&self, table: &ExportTable, name: &str, args: &[Value]) -> InteropResult<Value> {
        let fun = self
            .get(name)
            .ok_or_else(|| InteropError::UnknownMethod(name.to_string()))?;
        fun(table, args)
    }
}

impl Default for InteropRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub trait InteropProvider {
    fn install(&self, registry: &mut InteropRegistry);
}

pub struct StdInteropProvider;

impl InteropProvider for StdInteropProvider {
    fn install(&self, registry: &mut InteropRegistry) {
        registry.register("export", methods::interop_export);
        registry.register(
            "export_without_conversion",
            methods::interop_export_without_conversion,
        );
        registry.register("import", methods::interop_import);
        registry.register(
            "import_without_conversion",
            methods::interop_import_without_conversion,
        );
        // boxing
        registry.register("boxed?", methods::interop_is_boxed);
        registry.register("unbox", methods::interop_unbox);
        registry.register(
            "unbox_without_conversion",
            methods::interop_unbox_without_conversion,
        );
        // strings
        registry.register("java_string?", methods::interop_is_java_string);
        registry.register("to_java_string", methods::interop_to_java_string);
        registry.register("from_java_string", methods::interop_from_java_string);
    }
}
