//! Memoization tables owned by an [`Engine`](crate::Engine)
//!
//! Entries are keyed by unit strings or token lists and are never evicted. Memory grows with
//! the number of distinct unit forms seen, which the finite catalog bounds in practice.
//! Tables are safe to share between threads; readers only block while a miss is stored.

use crate::error::Result;
use crate::registry::BaseUnits;
use crate::types::Quantity;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Number of entries held by each table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub parsed_units: usize,
    pub base_units: usize,
    pub unit_strings: usize,
    pub targets: usize,
}

/// Concurrent memoization tables for parsing, base reduction, formatting and conversion
#[derive(Debug, Default)]
pub struct Cache {
    /// Unit word -> tokens
    parsed_units: RwLock<HashMap<String, Vec<String>>>,
    /// Token key -> base-unit reduction
    base_units: RwLock<HashMap<String, BaseUnits>>,
    /// Token key -> rendered unit string
    unit_strings: RwLock<HashMap<String, String>>,
    /// Target unit string -> normalized target quantity
    targets: RwLock<HashMap<String, Quantity>>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn parsed_units(
        &self,
        word: &str,
        compute: impl FnOnce() -> Result<Vec<String>>,
    ) -> Result<Vec<String>> {
        lookup(&self.parsed_units, "parsed units", word, compute)
    }

    pub(crate) fn base_units(
        &self,
        key: &str,
        compute: impl FnOnce() -> Result<BaseUnits>,
    ) -> Result<BaseUnits> {
        lookup(&self.base_units, "base units", key, compute)
    }

    pub(crate) fn unit_string(&self, key: &str, compute: impl FnOnce() -> String) -> String {
        let table = &self.unit_strings;
        if let Some(hit) = read(table, key) {
            return hit;
        }
        tracing::trace!(key, "unit string cache miss");
        let value = compute();
        write(table, key, value)
    }

    pub(crate) fn target(
        &self,
        units: &str,
        compute: impl FnOnce() -> Result<Quantity>,
    ) -> Result<Quantity> {
        lookup(&self.targets, "conversion target", units, compute)
    }

    /// Drop every memoized entry
    pub fn clear(&self) {
        lock_write(&self.parsed_units).clear();
        lock_write(&self.base_units).clear();
        lock_write(&self.unit_strings).clear();
        lock_write(&self.targets).clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            parsed_units: lock_read(&self.parsed_units).len(),
            base_units: lock_read(&self.base_units).len(),
            unit_strings: lock_read(&self.unit_strings).len(),
            targets: lock_read(&self.targets).len(),
        }
    }

    /// Total number of memoized entries
    pub fn len(&self) -> usize {
        let stats = self.stats();
        stats.parsed_units + stats.base_units + stats.unit_strings + stats.targets
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Return the cached value for `key`, computing and storing it on a miss.
///
/// Failed computations are not stored.
fn lookup<V: Clone>(
    table: &RwLock<HashMap<String, V>>,
    name: &str,
    key: &str,
    compute: impl FnOnce() -> Result<V>,
) -> Result<V> {
    if let Some(hit) = read(table, key) {
        return Ok(hit);
    }
    tracing::trace!(table = name, key, "cache miss");
    let value = compute()?;
    Ok(write(table, key, value))
}

fn read<V: Clone>(table: &RwLock<HashMap<String, V>>, key: &str) -> Option<V> {
    lock_read(table).get(key).cloned()
}

/// Store `value` unless another thread got there first; return the stored entry
fn write<V: Clone>(table: &RwLock<HashMap<String, V>>, key: &str, value: V) -> V {
    lock_write(table)
        .entry(key.to_string())
        .or_insert(value)
        .clone()
}

// Entries are inserted whole, so a poisoned table is still consistent
fn lock_read<V>(
    table: &RwLock<HashMap<String, V>>,
) -> std::sync::RwLockReadGuard<'_, HashMap<String, V>> {
    table.read().unwrap_or_else(PoisonError::into_inner)
}

fn lock_write<V>(
    table: &RwLock<HashMap<String, V>>,
) -> std::sync::RwLockWriteGuard<'_, HashMap<String, V>> {
    table.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QtyError;

    #[test]
    fn test_lookup_memoizes() {
        let cache = Cache::new();
        let mut calls = 0;
        let first = cache.parsed_units("cm", || {
            calls += 1;
            Ok(vec!["<centi>".to_string(), "<meter>".to_string()])
        });
        assert_eq!(calls, 1);
        let second = cache.parsed_units("cm", || unreachable!("cached"));
        assert_eq!(first, second);
        assert_eq!(cache.stats().parsed_units, 1);
    }

    #[test]
    fn test_errors_not_cached() {
        let cache = Cache::new();
        let result = cache.parsed_units("zz", || Err(QtyError::UnknownUnit("zz".to_string())));
        assert!(result.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = Cache::new();
        cache.unit_string("<meter>|", || "m".to_string());
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
