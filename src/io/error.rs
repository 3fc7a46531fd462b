//! Error types for grid generation, composition and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid drawing operations
#[derive(Debug)]
pub enum GridError {
    /// Extent, dimensions or axis selection violate their invariants
    ///
    /// Raised for non-positive or non-finite sizes, zero cell counts, or an
    /// axis selector with both axes disabled. Never retried.
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A caller required output but the generated set was empty
    EmptyResult {
        /// What was expected to contain shapes
        subject: String,
    },

    /// Shapes were attached to a layer that was never registered
    UnknownLayer {
        /// Name of the missing layer
        name: String,
    },

    /// A layer with the same name was registered twice
    DuplicateLayer {
        /// Name of the duplicated layer
        name: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::EmptyResult { subject } => {
                write!(f, "No shapes produced for {subject}")
            }
            Self::UnknownLayer { name } => {
                write!(f, "Layer '{name}' has not been registered")
            }
            Self::DuplicateLayer { name } => {
                write!(f, "Layer '{name}' is already registered")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid drawing results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an empty result error
pub fn empty_result(subject: &impl ToString) -> GridError {
    GridError::EmptyResult {
        subject: subject.to_string(),
    }
}
