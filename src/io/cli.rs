//! Command-line interface for sweeping occupation probabilities

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::estimator::EstimatorConfig;
use crate::analysis::sweep::{probability_steps, sweep_connection_probability};
use crate::io::configuration::{
    DEFAULT_CSV_OUTPUT, DEFAULT_GRID_SIZE, DEFAULT_SEED, DEFAULT_SWEEP_STEPS, DEFAULT_TRIALS,
};
use crate::io::error::Result;
use crate::io::export::write_curve_csv;
use crate::io::plot::render_curve_png;
use crate::io::progress::SweepProgress;

#[derive(Parser)]
#[command(name = "percolate")]
#[command(
    author,
    version,
    about = "Estimate corner-to-corner percolation probability on random grids"
)]
/// Command-line arguments for the percolation estimation tool
pub struct Cli {
    /// Side length of the square sample grid
    #[arg(short = 's', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Monte Carlo trials per probability value
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Lowest occupation probability in the sweep
    #[arg(long, default_value_t = 0.0)]
    pub p_min: f64,

    /// Highest occupation probability in the sweep
    #[arg(long, default_value_t = 1.0)]
    pub p_max: f64,

    /// Number of evenly spaced probability values
    #[arg(long, default_value_t = DEFAULT_SWEEP_STEPS)]
    pub steps: usize,

    /// Random seed for reproducible estimation
    #[arg(short = 'S', long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output path for the curve CSV
    #[arg(short, long, value_name = "CSV", default_value = DEFAULT_CSV_OUTPUT)]
    pub output: PathBuf,

    /// Also render the curve as a PNG chart
    #[arg(long, value_name = "PNG")]
    pub plot: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Estimator configuration derived from the arguments
    pub const fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig {
            grid_size: self.size,
            trials: self.trials,
        }
    }
}

/// Orchestrates one sweep run: estimation, progress display, and export
pub struct SweepRunner {
    cli: Cli,
}

impl SweepRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the sweep and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation fails or an output file
    /// cannot be written.
    pub fn run(&self) -> Result<()> {
        let ps = probability_steps(self.cli.p_min, self.cli.p_max, self.cli.steps)?;
        let config = self.cli.estimator_config();
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        let progress = if self.cli.should_show_progress() {
            SweepProgress::new(ps.len())
        } else {
            SweepProgress::hidden()
        };

        let points = sweep_connection_probability(&ps, &config, &mut rng, |point| {
            progress.record_point(point.p, point.probability);
        })?;

        write_curve_csv(&points, &self.cli.output)?;
        if let Some(plot_path) = &self.cli.plot {
            render_curve_png(&points, plot_path)?;
        }

        progress.finish(format!(
            "{} points ({} trials each on a {}x{} grid) -> {}",
            points.len(),
            config.trials,
            config.grid_size,
            config.grid_size,
            self.cli.output.display()
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_configuration_constants() {
        let cli = Cli::parse_from(["percolate"]);
        assert_eq!(cli.size, DEFAULT_GRID_SIZE);
        assert_eq!(cli.trials, DEFAULT_TRIALS);
        assert_eq!(cli.steps, DEFAULT_SWEEP_STEPS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.plot.is_none());
        assert!(cli.should_show_progress());
    }

    #[test]
    fn estimator_config_follows_arguments() {
        let cli = Cli::parse_from(["percolate", "--size", "25", "--trials", "400"]);
        let config = cli.estimator_config();
        assert_eq!(config.grid_size, 25);
        assert_eq!(config.trials, 400);
    }
}
