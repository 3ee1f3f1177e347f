// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reusable conversion functions for
//! [`EnvironmentVariable::with_converter`](crate::variable::EnvironmentVariable::with_converter).
//!
//! ```text
//! separated::<T>(',')   "a, b ,c" --> [a, b, c]   (items via FromEnvStr)
//! json::<T>()           '{"k": 1}' --> T          (serde_json)
//! ```

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::variable::FromEnvStr;

/// Splits on `separator` and converts each trimmed item with `T`'s built-in
/// converter. An empty value yields an empty list.
///
/// # Example
///
/// ```
/// use envvar::converters::separated;
/// use envvar::variable::EnvironmentVariable;
///
/// let ports = EnvironmentVariable::with_converter("ENVVAR_DOC_PORTS", separated::<u16>(','), None);
/// ports.set("80, 443")?;
/// assert_eq!(ports.get()?, Some(vec![80, 443]));
/// # ports.unset();
/// # Ok::<(), envvar::error::EnvVarError>(())
/// ```
pub fn separated<T: FromEnvStr>(separator: char) -> impl Fn(&str) -> anyhow::Result<Vec<T>> {
    move |raw: &str| {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split(separator)
            .enumerate()
            .map(|(index, item)| {
                T::from_env_str(item.trim()).with_context(|| format!("invalid list item #{index}"))
            })
            .collect()
    }
}

/// Deserializes the value as JSON.
pub fn json<T: DeserializeOwned>() -> impl Fn(&str) -> anyhow::Result<T> {
    |raw: &str| serde_json::from_str::<T>(raw).context("invalid JSON")
}
