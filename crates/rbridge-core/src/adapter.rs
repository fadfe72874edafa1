//! Adapter location and native path composition.
//!
//! Finds the rJava adapter package inside the installation and composes
//! the platform- and architecture-specific paths consumed by the
//! environment mutator.

use crate::config::{EnvVars, InstallLayout};
use crate::env::EnvBridge;
use crate::error::{RBridgeError, Result};
use crate::platform::PlatformSpec;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the directory of the rJava adapter package.
///
/// The default packages directory is `home/library` (Windows, macOS) or
/// `home/site-library` (Linux). An `R_LIBS` override replaces the default
/// unconditionally on Windows; on macOS and Linux only when the adapter
/// actually exists under it. The asymmetry is intentional per-platform
/// hardening and is preserved as-is.
pub fn resolve_adapter_dir(
    env: &impl EnvBridge,
    spec: &PlatformSpec,
    home: &Path,
) -> Result<PathBuf> {
    let mut packages = home.join(spec.packages_dir);

    if let Some(libs) = env.get_non_blank(EnvVars::R_LIBS) {
        let candidate = PathBuf::from(libs);
        if spec.trust_packages_override
            || candidate.join(InstallLayout::ADAPTER_PACKAGE).exists()
        {
            debug!(
                "Using packages directory from {}: {}",
                EnvVars::R_LIBS,
                candidate.display()
            );
            packages = candidate;
        } else {
            debug!(
                "{} is set but {} is absent under it, keeping {}",
                EnvVars::R_LIBS,
                InstallLayout::ADAPTER_PACKAGE,
                packages.display()
            );
        }
    }

    let adapter = packages.join(InstallLayout::ADAPTER_PACKAGE);
    if !adapter.exists() {
        return Err(RBridgeError::AdapterNotFound { path: adapter });
    }
    Ok(adapter)
}

/// Word size of the running process, in bits.
///
/// The process word size, not the OS architecture: a 32-bit process on a
/// 64-bit OS must load 32-bit R libraries.
pub fn process_word_size() -> u32 {
    (std::mem::size_of::<usize>() * 8) as u32
}

/// Architecture tag for a word size. Unrecognized sizes get no tag.
fn arch_tag(word_size: u32) -> Option<&'static str> {
    match word_size {
        32 => Some(InstallLayout::ARCH_32),
        64 => Some(InstallLayout::ARCH_64),
        _ => None,
    }
}

/// Compose the adapter's native shared-library directory.
///
/// `adapter/jri` on every platform; Windows appends `i386` or `x64` by
/// process word size. An unrecognized word size leaves the path
/// unsuffixed.
pub fn native_lib_dir(adapter: &Path, spec: &PlatformSpec, word_size: u32) -> PathBuf {
    arch_suffixed(adapter.join(InstallLayout::NATIVE_SUBDIR), spec, word_size)
}

/// Compose the runtime executable directory, `home/bin[/<arch>]`.
///
/// Appended to the OS `Path` variable on Windows so R's own DLLs resolve
/// next to the executables.
pub fn runtime_bin_dir(home: &Path, spec: &PlatformSpec, word_size: u32) -> PathBuf {
    arch_suffixed(home.join(InstallLayout::BIN_DIR), spec, word_size)
}

fn arch_suffixed(dir: PathBuf, spec: &PlatformSpec, word_size: u32) -> PathBuf {
    if spec.arch_suffixed {
        if let Some(tag) = arch_tag(word_size) {
            return dir.join(tag);
        }
    }
    dir
}
