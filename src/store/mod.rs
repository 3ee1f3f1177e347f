// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable stores.
//!
//! # Architecture
//!
//! ```text
//! EnvStore { read, write, delete, exists }
//!    |
//!    +-- ProcessEnv   std::env (global, unsynchronized)
//!    +-- MemoryEnv    Arc<RwLock<BTreeMap<EnvKey, String>>>
//! ```
//!
//! - **No locking on the process environment**: last writer wins
//! - **Validated writes**: names and values std would panic on are errors
//! - **UTF-8 internal**: non-UTF-8 process values are read lossily

pub mod memory;
pub mod types;

#[cfg(test)]
mod tests;

use crate::error::{EnvResult, EnvVarError};

pub use memory::MemoryEnv;

/// Read/write access to a set of environment variables.
pub trait EnvStore {
    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::InvalidName`] or [`EnvVarError::InvalidValue`]
    /// when the pair cannot be represented in a process environment.
    fn write(&self, key: &str, value: &str) -> EnvResult<()>;

    /// Removes `key`. Absent keys are ignored.
    fn delete(&self, key: &str);

    /// Returns `true` if `key` is present, even with an empty value.
    fn exists(&self, key: &str) -> bool {
        self.read(key).is_some()
    }
}

/// The environment of the running process.
///
/// # Thread Safety
///
/// Writes go straight to `std::env::set_var` / `remove_var`. Those are only
/// sound while no other thread reads or writes the environment at the same
/// time (including through libc `getenv`). Callers that mutate variables
/// from several threads must serialize access themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn read(&self, key: &str) -> Option<String> {
        std::env::var_os(key)
            .map(|value| value.into_string().unwrap_or_else(|raw| raw.to_string_lossy().into_owned()))
    }

    fn write(&self, key: &str, value: &str) -> EnvResult<()> {
        validate(key, value)?;
        // SAFETY: see the type-level contract; synchronization is the caller's job.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }

    fn delete(&self, key: &str) {
        // A name that could never have been stored is already absent.
        if validate_name(key).is_err() {
            return;
        }
        // SAFETY: see the type-level contract.
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn exists(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }
}

/// Checks that `key` can be used as an environment variable name.
pub(crate) fn validate_name(key: &str) -> EnvResult<()> {
    let reason = if key.is_empty() {
        "name is empty"
    } else if key.contains('=') {
        "name contains '='"
    } else if key.contains('\0') {
        "name contains a NUL byte"
    } else {
        return Ok(());
    };
    Err(EnvVarError::InvalidName {
        name: key.to_string(),
        reason,
    })
}

/// Checks a name/value pair before it is written.
pub(crate) fn validate(key: &str, value: &str) -> EnvResult<()> {
    validate_name(key)?;
    if value.contains('\0') {
        return Err(EnvVarError::InvalidValue {
            name: key.to_string(),
            reason: "value contains a NUL byte",
        });
    }
    Ok(())
}
