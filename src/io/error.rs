//! Error types for dataset parsing, enumeration limits and command-line operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all cover-counting operations
#[derive(Debug)]
pub enum CoverError {
    /// Dataset text could not be parsed into a grid
    MalformedInput {
        /// Zero-based position of the dataset in the input
        dataset: usize,
        /// Description of what is wrong with the input
        reason: String,
    },

    /// More items than the selected representation or configured cap allows
    ///
    /// Raised before graph construction so that bits are never silently dropped
    CapacityExceeded {
        /// What overflowed (placements or cells)
        resource: &'static str,
        /// Number of items that would have to fit
        required: usize,
        /// Largest number of items allowed
        capacity: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Exhaustive reference counting requested for too many placements
    BruteForceLimit {
        /// Placement count of the dataset
        placements: usize,
        /// Largest placement count the reference counter accepts
        limit: usize,
    },

    /// Optimized and exhaustive counts disagree
    VerificationFailed {
        /// Zero-based position of the dataset in the input
        dataset: usize,
        /// Count produced by the pivoting search
        optimized: usize,
        /// Count produced by the exhaustive scan
        reference: usize,
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
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { dataset, reason } => {
                write!(f, "Malformed input in dataset {dataset}: {reason}")
            }
            Self::CapacityExceeded {
                resource,
                required,
                capacity,
            } => {
                write!(
                    f,
                    "Capacity exceeded: {required} {resource} do not fit (limit {capacity})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::BruteForceLimit { placements, limit } => {
                write!(
                    f,
                    "Exhaustive scan over {placements} placements refused (limit {limit})"
                )
            }
            Self::VerificationFailed {
                dataset,
                optimized,
                reference,
            } => {
                write!(
                    f,
                    "Verification failed for dataset {dataset}: search counted {optimized}, exhaustive scan counted {reference}"
                )
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
        }
    }
}

impl std::error::Error for CoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for cover-counting results
pub type Result<T> = std::result::Result<T, CoverError>;

impl From<std::io::Error> for CoverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdio>"),
            operation: "stream access",
            source: err,
        }
    }
}

/// Attaches a path and operation name to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a `FileSystem` error for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped with the path and operation
    fn with_path(self, path: &std::path::Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &std::path::Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| CoverError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CoverError {
    CoverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed input error
pub fn malformed_input(dataset: usize, reason: &impl ToString) -> CoverError {
    CoverError::MalformedInput {
        dataset,
        reason: reason.to_string(),
    }
}
