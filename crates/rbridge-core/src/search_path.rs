//! Process-wide search path mutation.
//!
//! The loader search path is modeled as an ordered, append-only list of
//! directories held in the platform's loader environment variable
//! (`PATH`, `DYLD_FALLBACK_LIBRARY_PATH`, or `LD_LIBRARY_PATH`). The
//! variable is consulted when the R binding loads its shared libraries
//! by name, so extending it before the binding loads is the supported
//! way to extend native-library resolution for this process.

use crate::config::EnvVars;
use crate::env::EnvBridge;
use crate::error::{RBridgeError, Result};
use crate::platform::PlatformSpec;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Append `dir` to the platform's loader search path.
///
/// No-op when the directory is already a member; the list never holds
/// duplicates. Returns whether an append happened. The extended list is
/// committed in a single write and stays in effect for the remainder of
/// process life.
pub fn append_library_search_path(
    env: &impl EnvBridge,
    spec: &PlatformSpec,
    dir: &Path,
) -> Result<bool> {
    let var = spec.library_path_var;
    let mut entries: Vec<PathBuf> = match env.get(var) {
        Some(value) if !value.is_empty() => std::env::split_paths(&value).collect(),
        _ => Vec::new(),
    };

    if entries.iter().any(|entry| entry == dir) {
        debug!("{} already contains {}", var, dir.display());
        return Ok(false);
    }

    entries.push(dir.to_path_buf());
    let joined = std::env::join_paths(&entries)
        .map_err(|e| RBridgeError::LibraryPathMutation {
            variable: var.to_string(),
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?
        .into_string()
        .map_err(|_| RBridgeError::LibraryPathMutation {
            variable: var.to_string(),
            path: dir.to_path_buf(),
            message: "the extended list is not valid Unicode".to_string(),
        })?;

    env.set(var, &joined)?;
    info!("Added {} to {}", dir.display(), var);
    Ok(true)
}

/// Append `dir` to the OS `Path` variable.
///
/// Read-modify-write: the prior value is preserved as a prefix and `dir`
/// is concatenated with the OS path-list separator. Plain append, no
/// duplicate suppression. Windows branch only; returns the committed
/// value.
pub fn extend_os_path(env: &impl EnvBridge, dir: &Path) -> Result<String> {
    let separator = if cfg!(windows) { ';' } else { ':' };
    let current = env.get(EnvVars::OS_PATH).unwrap_or_default();
    let value = if current.is_empty() {
        dir.display().to_string()
    } else {
        format!("{}{}{}", current, separator, dir.display())
    };

    env.set(EnvVars::OS_PATH, &value)?;
    info!("Added {} to {}", dir.display(), EnvVars::OS_PATH);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;
    use crate::platform::Platform;

    fn joined(paths: &[&Path]) -> String {
        std::env::join_paths(paths)
            .unwrap()
            .into_string()
            .unwrap()
    }

    #[test]
    fn test_append_to_unset_variable() {
        let env = MemoryEnv::new();
        let spec = PlatformSpec::for_platform(Platform::Linux);
        let dir = Path::new("/opt/R/site-library/rJava/jri");

        assert!(append_library_search_path(&env, &spec, dir).unwrap());
        assert_eq!(env.get("LD_LIBRARY_PATH").unwrap(), joined(&[dir]));
    }

    #[test]
    fn test_append_preserves_existing_entries() {
        let existing = joined(&[Path::new("/usr/lib"), Path::new("/usr/local/lib")]);
        let env = MemoryEnv::new().with_var("LD_LIBRARY_PATH", &existing);
        let spec = PlatformSpec::for_platform(Platform::Linux);
        let dir = Path::new("/opt/R/site-library/rJava/jri");

        assert!(append_library_search_path(&env, &spec, dir).unwrap());
        assert_eq!(
            env.get("LD_LIBRARY_PATH").unwrap(),
            joined(&[Path::new("/usr/lib"), Path::new("/usr/local/lib"), dir])
        );
    }

    #[test]
    fn test_duplicate_append_is_a_no_op() {
        let env = MemoryEnv::new();
        let spec = PlatformSpec::for_platform(Platform::Linux);
        let dir = Path::new("/opt/R/site-library/rJava/jri");

        assert!(append_library_search_path(&env, &spec, dir).unwrap());
        assert!(!append_library_search_path(&env, &spec, dir).unwrap());

        let value = env.get("LD_LIBRARY_PATH").unwrap();
        let occurrences = std::env::split_paths(&value).filter(|p| p == dir).count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_extend_os_path_keeps_old_value_as_prefix() {
        let env = MemoryEnv::new().with_var("Path", "C:\\Windows\\system32");
        let dir = Path::new("C:/R/bin/x64");

        let value = extend_os_path(&env, dir).unwrap();
        assert!(value.starts_with("C:\\Windows\\system32"));
        assert!(value.len() > "C:\\Windows\\system32".len());
        assert!(value.ends_with(&dir.display().to_string()));
        assert_eq!(env.get("Path").unwrap(), value);
    }

    #[test]
    fn test_extend_os_path_on_unset_variable() {
        let env = MemoryEnv::new();
        let dir = Path::new("C:/R/bin");

        let value = extend_os_path(&env, dir).unwrap();
        assert_eq!(value, dir.display().to_string());
    }
}
