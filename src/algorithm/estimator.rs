//! Monte Carlo estimation of corner-to-corner connection probability
//!
//! Samples independent random grids at a fixed occupation probability and
//! reports the empirical fraction that percolate. The randomness source is
//! an explicit generator handle so estimates are reproducible under a fixed
//! seed.

use rand::Rng;

use crate::algorithm::connectivity::is_connected;
use crate::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_TRIALS, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Grid;

/// Parameters controlling one Monte Carlo estimate
#[derive(Clone, Copy, Debug)]
pub struct EstimatorConfig {
    /// Side length of the square sample grid
    pub grid_size: usize,
    /// Number of independent random grids to sample
    pub trials: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            trials: DEFAULT_TRIALS,
        }
    }
}

impl EstimatorConfig {
    /// Validate the configuration before sampling begins
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is zero or exceeds
    /// [`MAX_GRID_DIMENSION`], or if the trial count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &"grid size must be positive",
            ));
        }
        if self.grid_size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("grid size must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.trials,
                &"trial count must be positive",
            ));
        }
        Ok(())
    }
}

/// Estimate the probability that a random grid percolates corner to corner
///
/// Each trial refills one shared grid buffer with cells independently
/// occupied with probability `p`, then runs the default corner-to-corner
/// connectivity check. The result is the success fraction in `[0, 1]`.
///
/// `p` itself is not range-checked: values at or below 0 produce all-empty
/// grids (estimate exactly 0), values at or above 1 all-occupied grids
/// (estimate exactly 1).
///
/// # Errors
///
/// Returns an error if the configuration fails validation.
pub fn connection_probability<R: Rng + ?Sized>(
    p: f64,
    config: &EstimatorConfig,
    rng: &mut R,
) -> Result<f64> {
    config.validate()?;

    let mut grid = Grid::new(config.grid_size, config.grid_size)?;
    let mut successes: usize = 0;

    for _ in 0..config.trials {
        grid.fill_random(p, rng);
        if is_connected(&grid) {
            successes += 1;
        }
    }

    Ok(successes as f64 / config.trials as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_contract() {
        let config = EstimatorConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.trials, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn degenerate_configs_are_rejected() {
        let no_trials = EstimatorConfig {
            grid_size: 10,
            trials: 0,
        };
        assert!(no_trials.validate().is_err());

        let no_grid = EstimatorConfig {
            grid_size: 0,
            trials: 100,
        };
        assert!(no_grid.validate().is_err());

        let oversized = EstimatorConfig {
            grid_size: MAX_GRID_DIMENSION + 1,
            trials: 100,
        };
        assert!(oversized.validate().is_err());
    }
}
