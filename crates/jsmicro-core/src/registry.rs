//! Named benchmark entries and the registry the harness discovers them from.
//!
//! A [`Registry`] is an ordinary value so suites can be assembled and
//! tested in isolation. [`test()`] and [`with_global`] wrap one process-wide
//! instance for cases that register themselves at startup.

use std::sync::{Mutex, OnceLock, PoisonError};

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::value::BenchValue;

/// A zero-argument benchmark entry point.
pub type EntryPoint = fn() -> BenchValue;

/// A benchmark bound to its registry name.
#[derive(Clone, Debug)]
pub struct BenchEntry {
    name: String,
    description: String,
    entry: EntryPoint,
}

impl BenchEntry {
    /// Create an entry with an empty description.
    pub fn new(name: impl Into<String>, entry: EntryPoint) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            entry,
        }
    }

    /// Attach the human-readable description shown in reports.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Short identifying key, e.g. `string-indexOf-2`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description for reports.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The entry point function itself.
    pub fn entry(&self) -> EntryPoint {
        self.entry
    }

    /// Invoke the entry point once.
    pub fn run(&self) -> BenchValue {
        (self.entry)()
    }
}

/// Benchmarks keyed by name, iterated in registration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, BenchEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a benchmark.
    ///
    /// Rejects empty names and names that are already taken; on a
    /// duplicate the earlier entry stays in place.
    pub fn register(&mut self, entry: BenchEntry) -> Result<(), RegistryError> {
        if entry.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.entries.contains_key(&entry.name) {
            return Err(RegistryError::DuplicateName { name: entry.name });
        }
        tracing::debug!(name = %entry.name, "registered benchmark");
        self.entries.insert(entry.name.clone(), entry);
        Ok(())
    }

    /// Look up a benchmark by name.
    pub fn get(&self, name: &str) -> Option<&BenchEntry> {
        self.entries.get(name)
    }

    /// Whether a benchmark with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered benchmarks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no benchmarks are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BenchEntry> {
        self.entries.values()
    }

    /// All names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve a list of names to entries.
    ///
    /// An empty filter selects every entry in registration order. Otherwise
    /// entries come back in filter order with repeats dropped, and the first
    /// unknown name fails the whole selection.
    pub fn select<S: AsRef<str>>(&self, filters: &[S]) -> Result<Vec<&BenchEntry>, RegistryError> {
        if filters.is_empty() {
            return Ok(self.iter().collect());
        }
        let mut picked: IndexMap<&str, &BenchEntry> = IndexMap::with_capacity(filters.len());
        for name in filters {
            let name = name.as_ref();
            let entry = self
                .entries
                .get_key_value(name)
                .ok_or_else(|| RegistryError::UnknownName {
                    name: name.to_owned(),
                })?;
            picked.entry(entry.0.as_str()).or_insert(entry.1);
        }
        Ok(picked.into_values().collect())
    }
}

static GLOBAL: OnceLock<Mutex<Registry>> = OnceLock::new();

fn global() -> &'static Mutex<Registry> {
    GLOBAL.get_or_init(|| Mutex::new(Registry::new()))
}

/// Register `entry` under `name` in the process-wide registry.
///
/// Only makes the benchmark discoverable; nothing is run.
pub fn test(entry: EntryPoint, name: &str, description: &str) -> Result<(), RegistryError> {
    let mut reg = global().lock().unwrap_or_else(PoisonError::into_inner);
    reg.register(BenchEntry::new(name, entry).with_description(description))
        .inspect_err(|err| tracing::warn!(%err, "benchmark registration rejected"))
}

/// Read the process-wide registry.
pub fn with_global<R>(f: impl FnOnce(&Registry) -> R) -> R {
    let reg = global().lock().unwrap_or_else(PoisonError::into_inner);
    f(&reg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn one() -> BenchValue {
        BenchValue::Index(Some(1))
    }

    fn nothing() -> BenchValue {
        BenchValue::Undefined
    }

    #[test]
    fn register_then_lookup() {
        let mut reg = Registry::new();
        reg.register(BenchEntry::new("a", one).with_description("first"))
            .unwrap();

        let entry = reg.get("a").unwrap();
        assert_eq!(entry.name(), "a");
        assert_eq!(entry.description(), "first");
        assert_eq!(entry.run(), BenchValue::Index(Some(1)));
        assert!(reg.contains("a"));
        assert!(!reg.contains("b"));
    }

    #[test]
    fn empty_name_rejected() {
        let mut reg = Registry::new();
        let err = reg.register(BenchEntry::new("", one)).unwrap_err();
        assert_eq!(err, RegistryError::EmptyName);
        assert!(reg.is_empty());
    }

    #[test]
    fn duplicate_keeps_first() {
        let mut reg = Registry::new();
        reg.register(BenchEntry::new("a", one)).unwrap();
        let err = reg.register(BenchEntry::new("a", nothing)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName { name: "a".into() });
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("a").unwrap().run(), BenchValue::Index(Some(1)));
    }

    #[test]
    fn select_empty_filter_returns_all_in_order() {
        let mut reg = Registry::new();
        for name in ["c", "a", "b"] {
            reg.register(BenchEntry::new(name, one)).unwrap();
        }
        let names: Vec<&str> = reg
            .select::<&str>(&[])
            .unwrap()
            .into_iter()
            .map(BenchEntry::name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn select_follows_filter_order() {
        let mut reg = Registry::new();
        for name in ["c", "a", "b"] {
            reg.register(BenchEntry::new(name, one)).unwrap();
        }
        let picked = reg.select(&["b", "c"]).unwrap();
        let names: Vec<&str> = picked.into_iter().map(BenchEntry::name).collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[test]
    fn select_drops_repeated_names() {
        let mut reg = Registry::new();
        for name in ["a", "b"] {
            reg.register(BenchEntry::new(name, one)).unwrap();
        }
        let picked = reg.select(&["b", "a", "b", "b"]).unwrap();
        let names: Vec<&str> = picked.into_iter().map(BenchEntry::name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn select_unknown_name_fails() {
        let mut reg = Registry::new();
        reg.register(BenchEntry::new("a", one)).unwrap();
        let err = reg.select(&["a", "zz"]).unwrap_err();
        assert_eq!(err, RegistryError::UnknownName { name: "zz".into() });
    }

    #[test]
    fn global_registration_is_visible() {
        test(one, "core-global-visible", "global registry smoke test").unwrap();
        let found = with_global(|reg| {
            reg.get("core-global-visible")
                .map(|e| (e.entry(), e.description().to_owned()))
        });
        let (entry, desc) = found.unwrap();
        assert_eq!(entry(), BenchValue::Index(Some(1)));
        assert_eq!(desc, "global registry smoke test");
    }

    #[test]
    fn global_duplicate_rejected() {
        test(one, "core-global-dup", "").unwrap();
        let err = test(nothing, "core-global-dup", "").unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "core-global-dup".into()
            }
        );
    }

    proptest! {
        #[test]
        fn names_preserve_registration_order(
            names in proptest::collection::vec("[a-z]{1,8}", 0..20),
        ) {
            let mut reg = Registry::new();
            let mut expected: Vec<String> = Vec::new();
            for name in &names {
                let fresh = !expected.contains(name);
                let result = reg.register(BenchEntry::new(name.clone(), one));
                prop_assert_eq!(result.is_ok(), fresh);
                if fresh {
                    expected.push(name.clone());
                }
            }
            let got: Vec<&str> = reg.names().collect();
            prop_assert_eq!(got, expected.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
