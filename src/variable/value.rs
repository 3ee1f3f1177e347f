// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in conversions from raw environment strings.
//!
//! ```text
//! String, PathBuf      passthrough
//! bool                 boolean::parse_bool (true/1/yes/on, false/0/no/off)
//! ints, floats, char   FromStr
//! NonZero*, IP/socket  FromStr
//! ```

use crate::boolean::parse_bool;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::num::{NonZeroU16, NonZeroU32, NonZeroU64, NonZeroUsize};
use std::path::PathBuf;

/// Types with a built-in converter from an environment string.
///
/// [`EnvironmentVariable::new`](super::EnvironmentVariable::new) picks the
/// converter from this trait. Use
/// [`EnvironmentVariable::with_converter`](super::EnvironmentVariable::with_converter)
/// for anything else.
pub trait FromEnvStr: Sized {
    /// Converts a raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid representation of `Self`.
    fn from_env_str(raw: &str) -> anyhow::Result<Self>;
}

impl FromEnvStr for String {
    fn from_env_str(raw: &str) -> anyhow::Result<Self> {
        Ok(raw.to_owned())
    }
}

impl FromEnvStr for PathBuf {
    fn from_env_str(raw: &str) -> anyhow::Result<Self> {
        Ok(Self::from(raw))
    }
}

impl FromEnvStr for bool {
    fn from_env_str(raw: &str) -> anyhow::Result<Self> {
        Ok(parse_bool(raw)?)
    }
}

/// Implements [`FromEnvStr`] through the type's `FromStr`.
macro_rules! impl_from_env_str_parse {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromEnvStr for $ty {
                fn from_env_str(raw: &str) -> anyhow::Result<Self> {
                    Ok(raw.parse::<$ty>()?)
                }
            }
        )+
    };
}

impl_from_env_str_parse! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, char,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroUsize,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr,
}
