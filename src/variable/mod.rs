// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed accessor for a single environment variable.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentVariable<T, S = ProcessEnv>
//!   name ---------> S: EnvStore (looked up on every call, never cached)
//!   convert        Fn(&str) -> anyhow::Result<T>
//!   default        Option<T>, returned as-is when unset
//!   obfuscated     mask values in errors, logs and Display
//!
//! get():  raw? --no--> default
//!          |
//!         yes --> convert --ok--> Some(value)
//!                    |
//!                   err --> obfuscated? --yes--> SecretValue   (no cause)
//!                                        --no---> Conversion   (cause kept)
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::LazyLock;
//! use envvar::variable::EnvironmentVariable;
//!
//! static PORT: LazyLock<EnvironmentVariable<u16>> =
//!     LazyLock::new(|| EnvironmentVariable::new("ENVVAR_DOC_PORT", Some(8080)));
//!
//! assert_eq!(PORT.get()?, Some(8080));
//! PORT.set(9000)?;
//! assert_eq!(PORT.get()?, Some(9000));
//! PORT.unset();
//! assert_eq!(PORT.require()?, 8080);
//! # Ok::<(), envvar::error::EnvVarError>(())
//! ```

pub mod value;


use std::fmt;
use std::sync::Arc;

use crate::error::{EnvResult, EnvVarError, MASK};
use crate::store::{EnvStore, ProcessEnv};

pub use value::FromEnvStr;

/// Shared conversion function from a raw string to `T`.
pub type Converter<T> = Arc<dyn Fn(&str) -> anyhow::Result<T> + Send + Sync>;

/// Descriptor for one environment variable.
///
/// Holds the variable name, how to convert it, what to return when it is
/// unset, and whether its values are secret. Every read goes to the store,
/// so changes made elsewhere in the process are seen immediately.
#[derive(Clone)]
pub struct EnvironmentVariable<T, S = ProcessEnv> {
    name: String,
    convert: Converter<T>,
    default: Option<T>,
    obfuscated: bool,
    store: S,
}

impl<T: FromEnvStr + 'static> EnvironmentVariable<T> {
    /// Creates an accessor using the built-in converter for `T`.
    pub fn new(name: impl Into<String>, default: Option<T>) -> Self {
        Self::with_converter(name, T::from_env_str, default)
    }
}

impl<T> EnvironmentVariable<T> {
    /// Creates an accessor with a caller-supplied conversion function.
    ///
    /// The default is never passed through `convert`.
    pub fn with_converter<F>(
        name: impl Into<String>,
        convert: F,
        default: Option<T>,
    ) -> Self
    where
        F: Fn(&str) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            convert: Arc::new(convert),
            default,
            obfuscated: false,
            store: ProcessEnv,
        }
    }
}

impl<T, S> EnvironmentVariable<T, S> {
    /// Marks the variable as secret (or not).
    #[must_use]
    pub fn obfuscated(mut self, obfuscated: bool) -> Self {
        self.obfuscated = obfuscated;
        self
    }

    /// Reads and writes through `store` instead of the current one.
    #[must_use]
    pub fn with_store<S2: EnvStore>(self, store: S2) -> EnvironmentVariable<T, S2> {
        EnvironmentVariable {
            name: self.name,
            convert: self.convert,
            default: self.default,
            obfuscated: self.obfuscated,
            store,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    #[must_use]
    pub const fn is_obfuscated(&self) -> bool {
        self.obfuscated
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn printable<'a>(&self, value: &'a str) -> &'a str {
        if self.obfuscated { MASK } else { value }
    }
}

impl<T, S: EnvStore> EnvironmentVariable<T, S> {
    /// Returns `true` if the variable exists, even with an empty value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.store.exists(&self.name)
    }

    /// Returns the stored string without conversion or defaulting.
    #[must_use]
    pub fn get_raw(&self) -> Option<String> {
        self.store.read(&self.name)
    }

    /// Stores the `Display` form of `value`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::InvalidName`] or [`EnvVarError::InvalidValue`]
    /// if the store cannot hold the pair.
    pub fn set(&self, value: impl fmt::Display) -> EnvResult<()> {
        let value = value.to_string();
        self.store.write(&self.name, &value)?;
        tracing::debug!(
            variable = %self.name,
            value = %self.printable(&value),
            "set environment variable"
        );
        Ok(())
    }

    /// Removes the variable. Does nothing if it is not set.
    pub fn unset(&self) {
        self.store.delete(&self.name);
        tracing::debug!(variable = %self.name, "unset environment variable");
    }

    /// Returns the converted value, or the default when unset.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::Conversion`] if the converter rejects the value,
    /// or [`EnvVarError::SecretValue`] if it does so for an obfuscated
    /// variable.
    pub fn get(&self) -> EnvResult<Option<T>>
    where
        T: Clone,
    {
        let Some(raw) = self.get_raw() else {
            return Ok(self.default.clone());
        };
        match (self.convert)(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(source) => Err(self.conversion_error(raw, source)),
        }
    }

    /// Like [`get`](Self::get), but a missing value without default is an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::Missing`] in addition to the errors of `get`.
    pub fn require(&self) -> EnvResult<T>
    where
        T: Clone,
    {
        self.get()?.ok_or_else(|| EnvVarError::Missing {
            name: self.name.clone(),
        })
    }

    fn conversion_error(&self, raw: String, source: anyhow::Error) -> EnvVarError {
        if self.obfuscated {
            // The cause may quote the raw value; it stops here.
            tracing::debug!(variable = %self.name, value = MASK, "conversion failed");
            EnvVarError::SecretValue {
                name: self.name.clone(),
            }
        } else {
            tracing::debug!(
                variable = %self.name,
                value = %raw,
                error = %source,
                "conversion failed"
            );
            EnvVarError::Conversion {
                name: self.name.clone(),
                value: raw,
                source,
            }
        }
    }
}

impl<T: fmt::Display, S> EnvironmentVariable<T, S> {
    /// Renders `"<name> (default: <default>)"`, masking the default when
    /// obfuscated. Never includes the live value.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display, S> fmt::Display for EnvironmentVariable<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (default: ", self.name)?;
        match &self.default {
            _ if self.obfuscated => f.write_str(MASK)?,
            Some(default) => write!(f, "{default}")?,
            None => f.write_str("none")?,
        }
        f.write_str(")")
    }
}

impl<T, S> fmt::Debug for EnvironmentVariable<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentVariable")
            .field("name", &self.name)
            .field("obfuscated", &self.obfuscated)
            .finish_non_exhaustive()
    }
}
