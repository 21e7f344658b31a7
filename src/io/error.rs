//! Error types for connectivity checks, estimation, and curve export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all percolation operations
#[derive(Debug)]
pub enum PercolationError {
    /// A source or target coordinate lies outside the grid
    ///
    /// Endpoint coordinates are never clamped; supplying an out-of-bounds
    /// endpoint is a caller bug and fails immediately.
    CellOutOfBounds {
        /// The offending coordinate as `[row, col]`
        cell: [usize; 2],
        /// Grid dimensions (rows, cols) at the time of the check
        dimensions: (usize, usize),
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

    /// A curve with no points was handed to a renderer or exporter
    EmptyCurve,

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write the estimated curve as CSV
    CsvExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to render the estimated curve as PNG
    PlotExport {
        /// Path where rendering was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, dimensions } => {
                write!(
                    f,
                    "Cell [{}, {}] is out of bounds for a {}x{} grid",
                    cell[0], cell[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCurve => {
                write!(f, "Curve contains no points")
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
            Self::CsvExport { path, source } => {
                write!(f, "Failed to write CSV to '{}': {source}", path.display())
            }
            Self::PlotExport { path, source } => {
                write!(f, "Failed to render plot to '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PercolationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CsvExport { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::PlotExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for percolation results
pub type Result<T> = std::result::Result<T, PercolationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PercolationError {
    PercolationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
