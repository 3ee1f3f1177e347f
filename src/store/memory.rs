// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment store.
//!
//! # Architecture
//!
//! ```text
//! MemoryEnv
//! vars: Arc<RwLock<BTreeMap<EnvKey, String>>>
//! clone shares the map (several accessors, one environment)
//! ```

use super::EnvStore;
use super::types::EnvKey;
use crate::error::EnvResult;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A process-independent set of environment variables.
///
/// Clones share the same variables, so a write through one handle is
/// visible through every other. Writes follow the same validation rules as
/// [`ProcessEnv`](super::ProcessEnv).
///
/// # Thread Safety
/// `MemoryEnv` is `Send` and `Sync`; each operation takes the lock once.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: Arc<RwLock<BTreeMap<EnvKey, String>>>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `vars`.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let vars = vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.read_lock()
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, BTreeMap<EnvKey, String>> {
        self.vars.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, BTreeMap<EnvKey, String>> {
        self.vars.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EnvStore for MemoryEnv {
    fn read(&self, key: &str) -> Option<String> {
        self.read_lock().get(&EnvKey::new(key)).cloned()
    }

    fn write(&self, key: &str, value: &str) -> EnvResult<()> {
        super::validate(key, value)?;
        self.write_lock().insert(EnvKey::new(key), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.write_lock().remove(&EnvKey::new(key));
    }

    fn exists(&self, key: &str) -> bool {
        self.read_lock().contains_key(&EnvKey::new(key))
    }
}
