//! Windows registry discovery of the R install path.
//!
//! One read: the `InstallPath` value under `HKLM\SOFTWARE\R-core\R`,
//! written by the R for Windows installer. This module owns the Win32
//! registry FFI boundary.
#![allow(unsafe_code)]

use crate::config::RegistryConfig;
use crate::error::{RBridgeError, Result};
use windows_sys::Win32::Foundation::ERROR_SUCCESS;
use windows_sys::Win32::System::Registry::{RegGetValueW, HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ};

/// NUL-terminated UTF-16 encoding for Win32 string arguments.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Read the R install path from the registry.
///
/// Any failure (key absent, wrong value type, access denied) is reported
/// as [`RBridgeError::HomeNotConfigured`] with the attempted location.
pub fn read_install_path() -> Result<String> {
    let key = wide(RegistryConfig::KEY);
    let value = wide(RegistryConfig::VALUE);

    // Two-call pattern: the first call reports the value size in bytes,
    // the second fills the buffer.
    let mut size: u32 = 0;
    // SAFETY: key and value are live NUL-terminated UTF-16 buffers; a null
    // pvData with a valid pcbData is the documented sizing call.
    let status = unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            key.as_ptr(),
            value.as_ptr(),
            RRF_RT_REG_SZ,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            &mut size,
        )
    };
    if status != ERROR_SUCCESS {
        return Err(registry_error(status));
    }

    let mut buf = vec![0u16; (size as usize).div_ceil(2)];
    // SAFETY: buf holds at least `size` bytes and stays alive across the
    // call; RegGetValueW writes at most `size` bytes and updates it.
    let status = unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            key.as_ptr(),
            value.as_ptr(),
            RRF_RT_REG_SZ,
            std::ptr::null_mut(),
            buf.as_mut_ptr().cast(),
            &mut size,
        )
    };
    if status != ERROR_SUCCESS {
        return Err(registry_error(status));
    }

    // RRF_RT_REG_SZ guarantees NUL termination; trim at the first NUL.
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    Ok(String::from_utf16_lossy(&buf[..len]))
}

fn registry_error(status: u32) -> RBridgeError {
    RBridgeError::HomeNotConfigured {
        message: format!(
            "registry read of HKLM\\{}\\{} failed with status {}",
            RegistryConfig::KEY,
            RegistryConfig::VALUE,
            status
        ),
    }
}
