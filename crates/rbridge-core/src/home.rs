//! Installation locator.
//!
//! Resolves the R home directory. An explicit `R_HOME` override wins;
//! otherwise the platform's discovery mechanism runs (registry on
//! Windows, well-known paths elsewhere), the result is validated against
//! the filesystem, and the value is written back under `R_HOME` so later
//! readers observe it.

use crate::config::EnvVars;
use crate::env::EnvBridge;
use crate::error::{RBridgeError, Result};
use crate::platform::{HomeDiscovery, PlatformSpec};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of home resolution.
#[derive(Debug, Clone)]
pub struct ResolvedHome {
    /// Path to the R installation.
    pub path: PathBuf,
    /// True when the path came from default discovery (and was
    /// re-exported into the environment) rather than from the override.
    pub discovered: bool,
}

/// Resolve the R home directory.
///
/// An `R_HOME` override is used verbatim without an existence check; a
/// stale override surfaces at adapter lookup. Discovered defaults are
/// validated here and re-exported under `R_HOME`.
pub fn resolve_home(env: &impl EnvBridge, spec: &PlatformSpec) -> Result<ResolvedHome> {
    if let Some(home) = env.get_non_blank(EnvVars::R_HOME) {
        debug!("Using R home from {}: {}", EnvVars::R_HOME, home);
        return Ok(ResolvedHome {
            path: PathBuf::from(home),
            discovered: false,
        });
    }

    let path = match &spec.discovery {
        HomeDiscovery::Registry => registry_install_path()?,
        HomeDiscovery::WellKnownPath(path) => {
            debug!("Probing well-known R home {}", path.display());
            path.clone()
        }
    };

    if !path.exists() {
        return Err(RBridgeError::HomeNotFound { path });
    }

    env.set(EnvVars::R_HOME, &path.to_string_lossy())?;
    info!("Discovered R home at {}", path.display());
    Ok(ResolvedHome {
        path,
        discovered: true,
    })
}

#[cfg(windows)]
fn registry_install_path() -> Result<PathBuf> {
    crate::platform::registry::read_install_path().map(PathBuf::from)
}

#[cfg(not(windows))]
fn registry_install_path() -> Result<PathBuf> {
    Err(RBridgeError::HomeNotConfigured {
        message: "the Windows registry is not available on this platform".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;
    use crate::platform::Platform;
    use tempfile::TempDir;

    fn linux_spec_with_default(path: PathBuf) -> PlatformSpec {
        let mut spec = PlatformSpec::for_platform(Platform::Linux);
        spec.discovery = HomeDiscovery::WellKnownPath(path);
        spec
    }

    #[test]
    fn test_override_used_verbatim_without_existence_check() {
        let env = MemoryEnv::new().with_var("R_HOME", "/nonexistent/R");
        let spec = PlatformSpec::for_platform(Platform::Linux);

        let home = resolve_home(&env, &spec).unwrap();
        assert_eq!(home.path, PathBuf::from("/nonexistent/R"));
        assert!(!home.discovered);
    }

    #[test]
    fn test_blank_override_is_treated_as_unset() {
        let temp = TempDir::new().unwrap();
        let env = MemoryEnv::new().with_var("R_HOME", "   ");
        let spec = linux_spec_with_default(temp.path().to_path_buf());

        let home = resolve_home(&env, &spec).unwrap();
        assert_eq!(home.path, temp.path());
        assert!(home.discovered);
    }

    #[test]
    fn test_discovered_home_is_exported() {
        let temp = TempDir::new().unwrap();
        let env = MemoryEnv::new();
        let spec = linux_spec_with_default(temp.path().to_path_buf());

        let home = resolve_home(&env, &spec).unwrap();
        assert!(home.discovered);
        assert_eq!(
            env.get("R_HOME").as_deref(),
            Some(temp.path().to_string_lossy().as_ref())
        );
    }

    #[test]
    fn test_missing_default_fails_without_export() {
        let env = MemoryEnv::new();
        let spec = linux_spec_with_default(PathBuf::from("/nonexistent/default/R"));

        let err = resolve_home(&env, &spec).unwrap_err();
        assert!(matches!(err, RBridgeError::HomeNotFound { .. }));
        assert_eq!(env.get("R_HOME"), None);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_registry_discovery_unavailable_off_windows() {
        let env = MemoryEnv::new();
        let mut spec = PlatformSpec::for_platform(Platform::Linux);
        spec.discovery = HomeDiscovery::Registry;

        let err = resolve_home(&env, &spec).unwrap_err();
        assert!(matches!(err, RBridgeError::HomeNotConfigured { .. }));
    }
}
