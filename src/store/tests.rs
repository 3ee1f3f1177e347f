// envvar: Typed Environment Variable Accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment stores.

use super::{EnvStore, MemoryEnv, ProcessEnv};
use crate::error::EnvVarError;
use std::collections::BTreeMap;

#[test]
fn test_memory_env_basic_operations() {
    let env = MemoryEnv::new();
    assert!(env.is_empty());

    env.write("FOO", "bar").expect("write should succeed");
    assert_eq!(env.read("FOO").as_deref(), Some("bar"));
    assert!(env.exists("FOO"));
    assert_eq!(env.read("NOTEXIST"), None);

    env.write("FOO", "baz").expect("overwrite should succeed");
    assert_eq!(env.read("FOO").as_deref(), Some("baz"));
    assert_eq!(env.len(), 1);

    env.delete("FOO");
    assert!(!env.exists("FOO"));
    env.delete("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_memory_env_empty_value_is_present() {
    let env = MemoryEnv::new();
    env.write("EMPTY", "").expect("write should succeed");
    assert!(env.exists("EMPTY"));
    assert_eq!(env.read("EMPTY").as_deref(), Some(""));
}

#[test]
fn test_memory_env_clones_share_state() {
    let env1 = MemoryEnv::new();
    let env2 = env1.clone();

    env2.write("SHARED", "value").expect("write should succeed");
    assert_eq!(env1.read("SHARED").as_deref(), Some("value"));

    env1.delete("SHARED");
    assert!(!env2.exists("SHARED"));
}

#[test]
fn test_memory_env_from_and_to_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = MemoryEnv::from_map(map.clone());
    assert_eq!(env.len(), 2);
    assert_eq!(env.to_map(), map);
}

#[test]
fn test_memory_env_key_case() {
    let env = MemoryEnv::new();
    env.write("Path", "/usr/bin").expect("write should succeed");
    if cfg!(windows) {
        assert_eq!(env.read("PATH").as_deref(), Some("/usr/bin"));
    } else {
        assert_eq!(env.read("PATH"), None);
    }
}

#[test]
fn test_write_rejects_invalid_names() {
    let env = MemoryEnv::new();
    for name in ["", "A=B", "A\0B"] {
        let err = env.write(name, "value").expect_err("name should be rejected");
        assert!(
            matches!(err, EnvVarError::InvalidName { .. }),
            "unexpected error for {name:?}: {err:?}"
        );
    }
    assert!(env.is_empty());
}

#[test]
fn test_write_rejects_nul_in_value() {
    let env = MemoryEnv::new();
    let err = env
        .write("NUL_VALUE", "se\0cret")
        .expect_err("value should be rejected");
    assert!(matches!(err, EnvVarError::InvalidValue { .. }));
    assert!(!err.to_string().contains("se\0cret"));
}

#[test]
fn test_process_env_roundtrip() {
    let env = ProcessEnv;
    let key = "ENVVAR_STORE_TEST_ROUNDTRIP";

    env.write(key, "value").expect("write should succeed");
    assert_eq!(env.read(key).as_deref(), Some("value"));
    assert_eq!(std::env::var(key).as_deref(), Ok("value"));

    env.write(key, "").expect("write should succeed");
    assert!(env.exists(key), "empty value should still be present");

    env.delete(key);
    assert!(!env.exists(key));
    assert_eq!(env.read(key), None);
}

#[test]
fn test_process_env_delete_invalid_name_is_noop() {
    ProcessEnv.delete("");
    ProcessEnv.delete("A=B");
    ProcessEnv.delete("A\0B");
}
