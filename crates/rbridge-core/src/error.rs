//! Error types for rbridge.
//!
//! Every failure in the configuration sequence is fatal: there are no
//! retries and no partial-success state, and the caller must treat the R
//! runtime as unavailable. Variants carry the attempted path and name the
//! environment variable that remedies the failure.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for R runtime configuration.
#[derive(Debug, Error)]
pub enum RBridgeError {
    /// Platform default discovery failed before producing a path.
    #[error("unable to locate the R home directory ({message}); set the R_HOME environment variable to your R installation")]
    HomeNotConfigured { message: String },

    /// A discovered home path does not exist on disk.
    #[error("R home directory does not exist: {path}; set the R_HOME environment variable to your R installation")]
    HomeNotFound { path: PathBuf },

    /// The rJava adapter package is absent from the packages directory.
    #[error("unable to locate the rJava package in {path}; set the R_LIBS environment variable to the directory containing it")]
    AdapterNotFound { path: PathBuf },

    /// The loader search-path list could not be extended.
    #[error("unable to add {path} to the {variable} search path: {message}")]
    LibraryPathMutation {
        variable: String,
        path: PathBuf,
        message: String,
    },

    /// The environment bridge rejected a write.
    #[error("unable to set the {name} environment variable: {message}")]
    EnvWriteFailed { name: String, message: String },
}

/// Result type alias for rbridge operations.
pub type Result<T> = std::result::Result<T, RBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_not_found_names_remediation_variable() {
        let err = RBridgeError::HomeNotFound {
            path: PathBuf::from("/usr/lib/R"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/lib/R"));
        assert!(msg.contains("R_HOME"));
    }

    #[test]
    fn test_adapter_not_found_names_remediation_variable() {
        let err = RBridgeError::AdapterNotFound {
            path: PathBuf::from("/opt/R/site-library/rJava"),
        };
        let msg = err.to_string();
        assert!(msg.contains("rJava"));
        assert!(msg.contains("R_LIBS"));
    }

    #[test]
    fn test_library_path_mutation_display() {
        let err = RBridgeError::LibraryPathMutation {
            variable: "LD_LIBRARY_PATH".into(),
            path: PathBuf::from("/opt/R/site-library/rJava/jri"),
            message: "invalid entry".into(),
        };
        assert!(err.to_string().contains("LD_LIBRARY_PATH"));
    }
}
