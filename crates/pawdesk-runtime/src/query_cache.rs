#![forbid(unsafe_code)]

//! In-memory query cache with key-prefix invalidation.
//!
//! Stands in for the data-fetching layer's cache: screens register the
//! queries they hold, the success coordinator invalidates keys, and the
//! screens refetch whatever is stale. Invalidating `["owners"]` marks every
//! entry under it stale, including each owner's detail.

use std::cell::RefCell;
use std::collections::BTreeMap;

use pawdesk_core::CacheKey;

use crate::success::CacheInvalidator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Entry {
    stale: bool,
    invalidations: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<CacheKey, Entry>,
    log: Vec<CacheKey>,
}

/// Cached query bookkeeping. Interior mutability keeps [`CacheInvalidator`]
/// usable through `&self`.
#[derive(Debug, Default)]
pub struct QueryCache {
    inner: RefCell<Inner>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly fetched query. Re-inserting a key marks it fresh.
    pub fn insert(&self, key: CacheKey) {
        self.inner
            .borrow_mut()
            .entries
            .entry(key)
            .or_default()
            .stale = false;
    }

    /// Mark a stale entry fresh again after a refetch.
    pub fn mark_fresh(&self, key: &CacheKey) -> bool {
        match self.inner.borrow_mut().entries.get_mut(key) {
            Some(entry) => {
                entry.stale = false;
                true
            }
            None => false,
        }
    }

    /// `Some(true)` if cached and stale, `Some(false)` if fresh, `None` if unknown.
    #[must_use]
    pub fn is_stale(&self, key: &CacheKey) -> Option<bool> {
        self.inner.borrow().entries.get(key).map(|e| e.stale)
    }

    /// Stale entries in key order.
    #[must_use]
    pub fn stale_keys(&self) -> Vec<CacheKey> {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|(_, e)| e.stale)
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// How many invalidations have touched `key`.
    #[must_use]
    pub fn invalidation_count(&self, key: &CacheKey) -> u64 {
        self.inner
            .borrow()
            .entries
            .get(key)
            .map_or(0, |e| e.invalidations)
    }

    /// Every key passed to [`invalidate`](CacheInvalidator::invalidate), in call order.
    #[must_use]
    pub fn invalidation_log(&self) -> Vec<CacheKey> {
        self.inner.borrow().log.clone()
    }
}

impl CacheInvalidator for QueryCache {
    fn invalidate(&self, key: &CacheKey) {
        let mut inner = self.inner.borrow_mut();
        inner.log.push(key.clone());

        let mut touched = 0u64;
        for (_, entry) in inner
            .entries
            .iter_mut()
            .filter(|(cached, _)| key.is_prefix_of(cached))
        {
            entry.stale = true;
            entry.invalidations += 1;
            touched += 1;
        }
        tracing::debug!(
            target: "pawdesk.invalidate",
            key = %key,
            entries = touched,
            "marked cached queries stale"
        );
    }
}
