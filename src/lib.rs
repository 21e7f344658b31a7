//! Monte Carlo estimation of percolation probability on random boolean grids
//!
//! The system checks corner-to-corner connectivity of occupied cells under
//! 4-neighbor adjacency, then estimates the probability that a randomly
//! occupied grid percolates as a function of the occupation probability.

#![forbid(unsafe_code)]

/// Core algorithm implementation including connectivity checking and Monte Carlo estimation
pub mod algorithm;
/// Statistical aggregation of estimates across occupation probability sweeps
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for sampling statistics
pub mod math;
/// Spatial grid management and random occupation
pub mod spatial;

pub use io::error::{PercolationError, Result};
