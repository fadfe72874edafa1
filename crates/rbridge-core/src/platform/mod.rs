//! Platform classification and the per-platform configuration descriptor.
//!
//! The configuration procedure differs across Windows, macOS, and Linux
//! only in a handful of values: how a default installation is discovered,
//! which packages directory to search, whether native directories carry
//! an architecture suffix, and which loader variable to extend.
//! [`PlatformSpec`] captures those values so one algorithm serves all
//! three platforms.

#[cfg(windows)]
pub mod registry;

use crate::config::{EnvVars, InstallLayout};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Supported operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Classify the running process's OS. Fixed for process lifetime.
    ///
    /// Anything that is neither Windows nor macOS is treated as Linux and
    /// gets the well-known-path discovery used there.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "macos")]
        {
            Platform::MacOs
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Platform::Linux
        }
    }

    /// Lowercase platform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a default installation directory is discovered when `R_HOME` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeDiscovery {
    /// Read the install path from the Windows registry.
    Registry,
    /// Probe a fixed well-known path.
    WellKnownPath(PathBuf),
}

/// Per-platform configuration descriptor.
///
/// Selected once by [`PlatformSpec::current`] at the top of the entry
/// point; tests construct custom descriptors to drive any platform's
/// branch on any host.
#[derive(Debug, Clone)]
pub struct PlatformSpec {
    pub platform: Platform,
    /// Default home discovery when the override is unset.
    pub discovery: HomeDiscovery,
    /// Packages directory name under home.
    pub packages_dir: &'static str,
    /// Whether an `R_LIBS` override is trusted without checking that the
    /// adapter exists under it.
    pub trust_packages_override: bool,
    /// Whether native directories carry an architecture suffix.
    pub arch_suffixed: bool,
    /// Loader search-path variable extended with the native directory.
    pub library_path_var: &'static str,
    /// Whether the OS executable search path is also extended with the
    /// runtime's `bin` directory.
    pub extend_os_path: bool,
}

impl PlatformSpec {
    /// Descriptor for the running platform.
    pub fn current() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Descriptor for a specific platform.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => Self {
                platform,
                discovery: HomeDiscovery::Registry,
                packages_dir: InstallLayout::PACKAGES_DIR,
                trust_packages_override: true,
                arch_suffixed: true,
                library_path_var: EnvVars::LOADER_PATH_WINDOWS,
                extend_os_path: true,
            },
            Platform::MacOs => Self {
                platform,
                discovery: HomeDiscovery::WellKnownPath(PathBuf::from(InstallLayout::MACOS_HOME)),
                packages_dir: InstallLayout::PACKAGES_DIR,
                trust_packages_override: false,
                arch_suffixed: false,
                library_path_var: EnvVars::LOADER_PATH_MACOS,
                extend_os_path: false,
            },
            Platform::Linux => Self {
                platform,
                discovery: HomeDiscovery::WellKnownPath(PathBuf::from(InstallLayout::LINUX_HOME)),
                packages_dir: InstallLayout::SITE_PACKAGES_DIR,
                trust_packages_override: false,
                arch_suffixed: false,
                library_path_var: EnvVars::LOADER_PATH_LINUX,
                extend_os_path: false,
            },
        }
    }
}
