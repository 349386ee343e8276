//! Export table configuration.

/// How a foreign string with unpaired surrogates becomes a native string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringPolicy {
    /// Replace unpaired surrogates with U+FFFD.
    #[default]
    Lossy,
    /// Reject the string with a type error.
    Strict,
}

#[derive(Clone, Copy, Debug)]
pub struct InteropConfig {
    pub strings: StringPolicy,
    pub initial_capacity: usize,
}

impl Default for InteropConfig {
    fn default() -> Self {
        Self {
            strings: StringPolicy::Lossy,
            initial_capacity: 64,
        }
    }
}

impl InteropConfig {
    /// Defaults overridden by `POLYX_STRICT_STRINGS` and `POLYX_EXPORT_CAPACITY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let strict = lookup("POLYX_STRICT_STRINGS")
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        if strict {
            config.strings = StringPolicy::Strict;
        }
        if let Some(cap) = lookup("POLYX_EXPORT_CAPACITY").and_then(|v| v.trim().parse().ok()) {
            config.initial_capacity = cap;
        }
        config
    }
}
