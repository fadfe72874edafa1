//! Centralized configuration for rbridge.
//!
//! Environment variable names, the Windows registry location written by
//! the R installer, and the well-known filesystem layout of an R
//! installation.

/// Environment variables read and written during configuration.
pub struct EnvVars;

impl EnvVars {
    /// Override for the R installation directory. Written back after
    /// default discovery so downstream readers observe the same value.
    pub const R_HOME: &'static str = "R_HOME";

    /// Override for the packages directory searched for the adapter.
    pub const R_LIBS: &'static str = "R_LIBS";

    /// Windows executable search path, extended with the R binary
    /// directory so R's own DLLs resolve.
    pub const OS_PATH: &'static str = "Path";

    /// Loader search-path variable per platform.
    pub const LOADER_PATH_WINDOWS: &'static str = "PATH";
    pub const LOADER_PATH_MACOS: &'static str = "DYLD_FALLBACK_LIBRARY_PATH";
    pub const LOADER_PATH_LINUX: &'static str = "LD_LIBRARY_PATH";
}

/// Registry location of the install path (Windows).
pub struct RegistryConfig;

impl RegistryConfig {
    /// Key under `HKEY_LOCAL_MACHINE`, written by the R for Windows installer.
    pub const KEY: &'static str = "SOFTWARE\\R-core\\R";
    pub const VALUE: &'static str = "InstallPath";
}

/// Well-known layout of an R installation.
pub struct InstallLayout;

impl InstallLayout {
    /// Default home on macOS (framework resource directory).
    pub const MACOS_HOME: &'static str = "/Library/Frameworks/R.framework/Resources";

    /// Default home on Linux (distribution package location).
    pub const LINUX_HOME: &'static str = "/usr/lib/R";

    /// Packages directory under home on Windows and macOS.
    pub const PACKAGES_DIR: &'static str = "library";

    /// Packages directory under home on Linux.
    pub const SITE_PACKAGES_DIR: &'static str = "site-library";

    /// The native-binding adapter package.
    pub const ADAPTER_PACKAGE: &'static str = "rJava";

    /// Shared-library directory inside the adapter package.
    pub const NATIVE_SUBDIR: &'static str = "jri";

    /// Executable directory under home.
    pub const BIN_DIR: &'static str = "bin";

    /// Architecture tags appended on Windows by process word size.
    pub const ARCH_32: &'static str = "i386";
    pub const ARCH_64: &'static str = "x64";
}
