// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!          variable::EnvironmentVariable<T, S>
//!          get / get_raw / set / unset / is_set
//!          require / describe
//!             |                 |
//!             v                 v
//!   convert (FromEnvStr       store (EnvStore)
//!   or caller closure)        ProcessEnv | MemoryEnv
//!      |          |
//!      v          v
//!   boolean    converters
//!   parse_bool separated / json
//!
//!   +-----------------------------------------+
//!   |  foundation   error (EnvVarError, MASK) |
//!   +-----------------------------------------+
//! ```

pub mod boolean;
pub mod converters;
pub mod error;
pub mod store;
pub mod variable;
