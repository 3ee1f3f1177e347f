// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key type for in-memory stores.
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path == path)
//!         case-sensitive elsewhere (PATH != path)
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An environment variable name compared the way the host OS compares them.
#[derive(Debug, Clone, Eq)]
pub struct EnvKey(String);

impl EnvKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> std::borrow::Cow<'_, str> {
        if cfg!(windows) {
            std::borrow::Cow::Owned(self.0.to_ascii_lowercase())
        } else {
            std::borrow::Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        if cfg!(windows) {
            self.0.eq_ignore_ascii_case(&other.0)
        } else {
            self.0 == other.0
        }
    }
}

impl Hash for EnvKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }
}
