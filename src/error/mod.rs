// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 EnvVarError
//!                      |
//!   +-----------+------+------+-------------+
//!   v           v             v             v
//! Conversion  SecretValue  Missing   InvalidName/InvalidValue
//! (source:    (no source,  (no
//!  anyhow)     masked)      default)
//!
//! Leaf errors:
//!   InvalidBooleanLiteral   boolean::parse_bool
//! ```
//!
//! `SecretValue` never carries the converter's error: its text may quote
//! the raw value, so the chain stops at the masked message.

use thiserror::Error;

/// Token substituted for values of obfuscated variables.
pub const MASK: &str = "*****";

/// Result type using [`EnvVarError`].
pub type EnvResult<T> = std::result::Result<T, EnvVarError>;

/// Errors raised by [`EnvironmentVariable`](crate::variable::EnvironmentVariable).
#[derive(Debug, Error)]
pub enum EnvVarError {
    /// The conversion function rejected the raw value.
    #[error("failed to convert '{value}' for {name}")]
    Conversion {
        name: String,
        value: String,
        #[source]
        source: anyhow::Error,
    },

    /// The conversion function rejected the raw value of an obfuscated variable.
    #[error("failed to convert '{}' for {name}", MASK)]
    SecretValue { name: String },

    /// The variable is not set and has no default.
    #[error("environment variable {name} is not set and has no default")]
    Missing { name: String },

    /// The variable name cannot be stored in the process environment.
    #[error("invalid environment variable name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The value cannot be stored in the process environment.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: &'static str },
}

/// A string that matches neither the truthy nor the falsy token set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{literal}' to boolean")]
pub struct InvalidBooleanLiteral {
    literal: String,
}

impl InvalidBooleanLiteral {
    pub(crate) fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// The rejected input, exactly as given.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }
}
