//! Statistical aggregation of connection probability estimates

/// Occupation probability sweeps producing curve points
pub mod sweep;

pub use sweep::{SweepPoint, probability_steps, sweep_connection_probability};
