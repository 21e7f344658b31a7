//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Boolean occupation grid storage and bounds queries
//! - In-place random refill between Monte Carlo trials

/// Occupation grid storage and random fill
pub mod grid;

pub use grid::Grid;
