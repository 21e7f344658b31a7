//! Runtime configuration defaults and limits

// Estimator defaults matching the documented contract
/// Default side length of the square sample grid
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Default number of Monte Carlo trials per probability value
pub const DEFAULT_TRIALS: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Sweep defaults: 21 steps over [0, 1] gives a 0.05 spacing
/// Default number of probability values in a sweep
pub const DEFAULT_SWEEP_STEPS: usize = 21;

/// Fixed seed for reproducible estimation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Default path for the exported curve CSV
pub const DEFAULT_CSV_OUTPUT: &str = "curve.csv";

// Plot geometry
/// Rendered plot width in pixels
pub const PLOT_WIDTH: u32 = 640;
/// Rendered plot height in pixels
pub const PLOT_HEIGHT: u32 = 480;
/// Margin between the image edge and the axis frame, in pixels
pub const PLOT_MARGIN: u32 = 40;
/// Half-width of the square marker drawn at each curve point, in pixels
pub const PLOT_MARKER_RADIUS: u32 = 2;
