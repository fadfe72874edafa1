//! rbridge - locate an installed R runtime and prepare the process
//! environment for an in-process binding.
//!
//! Before an embedded R engine can start, the process must know where R
//! lives and must be able to resolve the rJava/JRI shared libraries by
//! name. This crate finds the installation (explicit `R_HOME` override,
//! Windows registry, or well-known paths), locates the rJava adapter
//! package, and extends the process's loader search path and environment
//! so a subsequent binding succeeds. The scripting engine itself is a
//! downstream collaborator; this crate only hands it a configured
//! process.
//!
//! # Example
//!
//! ```rust,ignore
//! fn main() -> rbridge::Result<()> {
//!     let report = rbridge::configure()?;
//!     println!("R home: {}", report.home.display());
//!     // The R binding can now load its native libraries by name.
//!     Ok(())
//! }
//! ```
//!
//! Configuration mutates process-wide state (the loader search path and
//! environment variables) and is expected to run exactly once, from a
//! single thread, at startup. The sequence takes no locks; callers
//! serialize invocation.

pub mod adapter;
pub mod config;
pub mod env;
pub mod error;
pub mod home;
pub mod platform;
pub mod search_path;

// Re-export commonly used types
pub use adapter::{native_lib_dir, process_word_size, resolve_adapter_dir, runtime_bin_dir};
pub use env::{EnvBridge, MemoryEnv, ProcessEnv};
pub use error::{RBridgeError, Result};
pub use home::{resolve_home, ResolvedHome};
pub use platform::{HomeDiscovery, Platform, PlatformSpec};

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a completed configuration run.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    pub platform: Platform,
    /// Resolved R installation directory, exported as `R_HOME`.
    pub home: PathBuf,
    /// True when home came from default discovery rather than the override.
    pub home_discovered: bool,
    /// Directory of the rJava adapter package.
    pub adapter_dir: PathBuf,
    /// Native shared-library directory added to the loader search path.
    pub native_dir: PathBuf,
    /// Loader variable that was extended.
    pub library_path_var: String,
    /// False when the native directory was already on the search path.
    pub library_path_appended: bool,
    /// Executable directory appended to the OS `Path` variable (Windows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_path_extended: Option<PathBuf>,
}

/// Drives the configuration sequence over an environment bridge.
///
/// The bridge and the platform descriptor are fixed at construction;
/// [`Configurator::configure`] runs the linear sequence against them.
pub struct Configurator<E: EnvBridge> {
    env: E,
    spec: PlatformSpec,
}

impl<E: EnvBridge> Configurator<E> {
    /// Configurator for the running platform.
    pub fn new(env: E) -> Self {
        Self {
            env,
            spec: PlatformSpec::current(),
        }
    }

    /// Configurator with an explicit platform descriptor.
    pub fn with_spec(env: E, spec: PlatformSpec) -> Self {
        Self { env, spec }
    }

    /// The descriptor this configurator runs with.
    pub fn spec(&self) -> &PlatformSpec {
        &self.spec
    }

    /// Run the full configuration sequence.
    ///
    /// Linear, no retries: locate home, locate the adapter, compose the
    /// native paths, extend the loader search path, export variables.
    /// Any failure escalates immediately; no mutation from a later stage
    /// is applied after an earlier stage fails, and the caller must then
    /// treat the R runtime as unavailable.
    pub fn configure(&self) -> Result<ConfigReport> {
        let spec = &self.spec;
        info!("Configuring R runtime environment for {}", spec.platform);

        let home = home::resolve_home(&self.env, spec)?;
        let adapter_dir = adapter::resolve_adapter_dir(&self.env, spec, &home.path)?;

        let word_size = adapter::process_word_size();
        let native_dir = adapter::native_lib_dir(&adapter_dir, spec, word_size);
        debug!("Native library directory: {}", native_dir.display());

        let appended = search_path::append_library_search_path(&self.env, spec, &native_dir)?;

        let os_path_extended = if spec.extend_os_path {
            let bin_dir = adapter::runtime_bin_dir(&home.path, spec, word_size);
            search_path::extend_os_path(&self.env, &bin_dir)?;
            Some(bin_dir)
        } else {
            None
        };

        info!(
            "R runtime environment configured, home {}",
            home.path.display()
        );
        Ok(ConfigReport {
            platform: spec.platform,
            home: home.path,
            home_discovered: home.discovered,
            adapter_dir,
            native_dir,
            library_path_var: spec.library_path_var.to_string(),
            library_path_appended: appended,
            os_path_extended,
        })
    }
}

/// Configure the process environment for the running platform.
///
/// Convenience over [`Configurator`] with the real process environment.
pub fn configure() -> Result<ConfigReport> {
    Configurator::new(ProcessEnv).configure()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_configure_with_override_home() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("site-library").join("rJava")).unwrap();

        let env = MemoryEnv::new().with_var("R_HOME", temp.path().to_string_lossy());
        let configurator =
            Configurator::with_spec(env, PlatformSpec::for_platform(Platform::Linux));

        let report = configurator.configure().unwrap();
        assert_eq!(report.home, temp.path());
        assert!(!report.home_discovered);
        assert_eq!(
            report.native_dir,
            temp.path().join("site-library").join("rJava").join("jri")
        );
        assert_eq!(report.library_path_var, "LD_LIBRARY_PATH");
        assert!(report.library_path_appended);
        assert!(report.os_path_extended.is_none());
    }

    #[test]
    fn test_report_serializes() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("site-library").join("rJava")).unwrap();

        let env = MemoryEnv::new().with_var("R_HOME", temp.path().to_string_lossy());
        let configurator =
            Configurator::with_spec(env, PlatformSpec::for_platform(Platform::Linux));

        let report = configurator.configure().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["platform"], "linux");
        assert_eq!(json["library_path_appended"], true);
        // Unix runs have no OS Path extension and the field is omitted
        assert!(json.get("os_path_extended").is_none());
    }
}
