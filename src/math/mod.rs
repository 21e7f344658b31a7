//! Mathematical utilities for sampling statistics

/// Sampling error of binomial proportion estimates
pub mod probability;
