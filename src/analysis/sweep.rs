//! Occupation probability sweeps
//!
//! Runs the Monte Carlo estimator once per value in an ordered sequence of
//! occupation probabilities, attaching the sampling error to each estimate.
//! The output order matches the input order, so callers get a plottable
//! probability-vs-occupation curve directly.

use rand::Rng;

use crate::algorithm::estimator::{EstimatorConfig, connection_probability};
use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::binomial_proportion_standard_error;

/// One point of an estimated percolation curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    /// Occupation probability the estimate was sampled at
    pub p: f64,
    /// Estimated corner-to-corner connection probability
    pub probability: f64,
    /// Standard sampling error of the estimate
    pub standard_error: f64,
}

/// Build an evenly spaced, inclusive sequence of occupation probabilities
///
/// `steps` values from `min` to `max`, both endpoints included. The default
/// CLI sweep uses 21 steps over `[0, 1]`, a 0.05 spacing.
///
/// # Errors
///
/// Returns an error if `steps < 2` or `min > max`.
pub fn probability_steps(min: f64, max: f64, steps: usize) -> Result<Vec<f64>> {
    if steps < 2 {
        return Err(invalid_parameter(
            "steps",
            &steps,
            &"a sweep needs at least two probability values",
        ));
    }
    if min > max {
        return Err(invalid_parameter(
            "p_min",
            &min,
            &format!("lower bound must not exceed upper bound {max}"),
        ));
    }

    let spacing = (max - min) / (steps - 1) as f64;
    Ok((0..steps).map(|i| spacing.mul_add(i as f64, min)).collect())
}

/// Estimate the connection probability at every value of an ordered sweep
///
/// `on_point` fires after each completed estimate, letting the caller drive
/// progress reporting without this module depending on any display layer.
///
/// # Errors
///
/// Returns an error if the estimator configuration fails validation.
pub fn sweep_connection_probability<R: Rng + ?Sized>(
    ps: &[f64],
    config: &EstimatorConfig,
    rng: &mut R,
    mut on_point: impl FnMut(&SweepPoint),
) -> Result<Vec<SweepPoint>> {
    config.validate()?;

    let mut points = Vec::with_capacity(ps.len());
    for &p in ps {
        let probability = connection_probability(p, config, rng)?;
        let point = SweepPoint {
            p,
            probability,
            standard_error: binomial_proportion_standard_error(probability, config.trials),
        };
        on_point(&point);
        points.push(point);
    }

    Ok(points)
}
