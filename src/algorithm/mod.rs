//! Core percolation algorithms

/// Breadth-first connectivity checking over occupied cells
pub mod connectivity;
/// Monte Carlo estimation of connection probability
pub mod estimator;

pub use connectivity::{is_connected, is_connected_between};
pub use estimator::{EstimatorConfig, connection_probability};
