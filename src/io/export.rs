//! CSV export of estimated percolation curves

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::analysis::sweep::SweepPoint;
use crate::io::error::{PercolationError, Result};

/// Column header of the exported curve file
pub const CSV_HEADER: &str = "p,connection_probability,standard_error";

/// Write an estimated curve as CSV, one row per sweep point
///
/// Rows appear in sweep order with six decimal places per column. Parent
/// directories are created on demand.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_curve_csv(points: &[SweepPoint], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PercolationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create parent directory",
                source,
            })?;
        }
    }

    let mut contents = String::with_capacity(CSV_HEADER.len() + points.len() * 30);
    contents.push_str(CSV_HEADER);
    contents.push('\n');
    for point in points {
        // Infallible for String targets; keeps row formatting in one place
        let _ = writeln!(
            contents,
            "{:.6},{:.6},{:.6}",
            point.p, point.probability, point.standard_error
        );
    }

    fs::write(output_path, contents).map_err(|source| PercolationError::CsvExport {
        path: output_path.to_path_buf(),
        source,
    })
}
