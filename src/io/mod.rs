//! Input/output operations for curve export and the CLI driver

/// Command-line interface and sweep orchestration
pub mod cli;
/// Runtime configuration defaults and limits
pub mod configuration;
/// Error types for all operations
pub mod error;
/// CSV export of estimated curves
pub mod export;
/// PNG rendering of estimated curves
pub mod plot;
/// Progress reporting for probability sweeps
pub mod progress;
