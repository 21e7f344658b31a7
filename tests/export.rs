//! Validates CSV export and PNG rendering of estimated curves

use std::fs;

use percolation::PercolationError;
use percolation::analysis::sweep::SweepPoint;
use percolation::io::export::{CSV_HEADER, write_curve_csv};
use percolation::io::plot::render_curve_png;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn sample_curve() -> Vec<SweepPoint> {
    vec![
        SweepPoint {
            p: 0.0,
            probability: 0.0,
            standard_error: 0.0,
        },
        SweepPoint {
            p: 0.5,
            probability: 0.12,
            standard_error: 0.032_496,
        },
        SweepPoint {
            p: 1.0,
            probability: 1.0,
            standard_error: 0.0,
        },
    ]
}

#[test]
fn csv_contains_header_and_one_row_per_point() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("curve.csv");

    write_curve_csv(&sample_curve(), &path)?;

    let contents = fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.first().copied(), Some(CSV_HEADER));
    assert_eq!(lines.len(), 4);
    assert_eq!(lines.get(2).copied(), Some("0.500000,0.120000,0.032496"));
    Ok(())
}

#[test]
fn csv_export_creates_missing_parent_directories() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("deeper").join("curve.csv");

    write_curve_csv(&sample_curve(), &path)?;

    assert!(path.exists());
    Ok(())
}

#[test]
fn plot_renders_a_nonempty_png() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("curve.png");

    render_curve_png(&sample_curve(), &path)?;

    let metadata = fs::metadata(&path)?;
    assert!(metadata.len() > 0);
    Ok(())
}

#[test]
fn plot_rejects_an_empty_curve() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("empty.png");

    let result = render_curve_png(&[], &path);
    assert!(matches!(result, Err(PercolationError::EmptyCurve)));
    assert!(!path.exists());
    Ok(())
}
