// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Boolean literal parsing.
//!
//! ```text
//! "TRUE" | "1" | "Yes" | "on"   --> Ok(true)
//! "false" | "0" | "NO" | "Off"  --> Ok(false)
//! anything else                 --> Err(InvalidBooleanLiteral)
//! ```
//!
//! Matching is case-insensitive. Input is not trimmed, so `""` and `" "`
//! are rejected.

use crate::error::InvalidBooleanLiteral;

/// Tokens parsed as `true` (lower case).
pub const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];

/// Tokens parsed as `false` (lower case).
pub const FALSY: [&str; 4] = ["false", "0", "no", "off"];

/// Parses a common boolean spelling.
///
/// # Errors
///
/// Returns [`InvalidBooleanLiteral`] carrying `input` unchanged when it is not
/// in [`TRUTHY`] or [`FALSY`].
///
/// # Example
///
/// ```
/// use envvar::boolean::parse_bool;
///
/// assert_eq!(parse_bool("Yes"), Ok(true));
/// assert_eq!(parse_bool("OFF"), Ok(false));
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(input: &str) -> Result<bool, InvalidBooleanLiteral> {
    let lowered = input.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(InvalidBooleanLiteral::new(input))
    }
}
