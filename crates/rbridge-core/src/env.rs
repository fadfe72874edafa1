//! Process environment access.
//!
//! The process environment is global mutable state shared with the
//! downstream R binding, so every read and write in the configuration
//! sequence goes through the [`EnvBridge`] trait. Callers supply the
//! bridge at construction: [`ProcessEnv`] for the real environment,
//! [`MemoryEnv`] as a substitutable double for tests and dry runs.

use crate::error::{RBridgeError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Read/write access to an environment variable store.
pub trait EnvBridge {
    /// Read a variable. Returns `None` when unset.
    fn get(&self, name: &str) -> Option<String>;

    /// Write a variable, overwriting any existing value.
    fn set(&self, name: &str, value: &str) -> Result<()>;

    /// Read a variable, treating blank (whitespace-only) values as unset.
    fn get_non_blank(&self, name: &str) -> Option<String> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }
}

impl<T: EnvBridge + ?Sized> EnvBridge for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        (**self).set(name, value)
    }
}

/// Bridge over the real process environment.
///
/// Mutations are process-wide and unsynchronized; the configuration
/// sequence is expected to run once, from a single thread, before any
/// native R call. Callers serialize invocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvBridge for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        // std::env::set_var panics on '=' or NUL; surface those as a
        // rejected write instead.
        if name.is_empty() || name.contains('=') || name.contains('\0') || value.contains('\0') {
            return Err(RBridgeError::EnvWriteFailed {
                name: name.to_string(),
                message: "invalid variable name or value".to_string(),
            });
        }
        std::env::set_var(name, value);
        Ok(())
    }
}

/// In-memory bridge holding its own variable map.
///
/// Never touches the process environment. Used as the test double and as
/// the backing store for dry runs.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment seeded from the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: Mutex::new(std::env::vars().collect()),
        }
    }

    /// Seed a variable (builder-style, for test setup).
    pub fn with_var(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars
            .lock()
            .expect("env map lock poisoned")
            .insert(name.into(), value.into());
        self
    }
}

impl EnvBridge for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars
            .lock()
            .expect("env map lock poisoned")
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        self.vars
            .lock()
            .expect("env map lock poisoned")
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_roundtrip() {
        let env = MemoryEnv::new();
        assert_eq!(env.get("R_HOME"), None);

        env.set("R_HOME", "/opt/R").unwrap();
        assert_eq!(env.get("R_HOME").as_deref(), Some("/opt/R"));

        env.set("R_HOME", "/usr/lib/R").unwrap();
        assert_eq!(env.get("R_HOME").as_deref(), Some("/usr/lib/R"));
    }

    #[test]
    fn test_get_non_blank_filters_whitespace() {
        let env = MemoryEnv::new().with_var("R_HOME", "   ").with_var("R_LIBS", "/lib");
        assert_eq!(env.get_non_blank("R_HOME"), None);
        assert_eq!(env.get_non_blank("R_LIBS").as_deref(), Some("/lib"));
        assert_eq!(env.get_non_blank("UNSET"), None);
    }

    #[test]
    fn test_process_env_rejects_invalid_name() {
        let env = ProcessEnv;
        let err = env.set("BAD=NAME", "value").unwrap_err();
        assert!(matches!(err, RBridgeError::EnvWriteFailed { .. }));
    }

    #[test]
    fn test_process_env_reads_existing_variable() {
        // PATH (or Path) exists in any reasonable test environment
        let env = ProcessEnv;
        assert!(env.get("PATH").is_some() || env.get("Path").is_some());
    }
}
