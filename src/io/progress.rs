//! Progress reporting for occupation probability sweeps

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress bar advancing once per completed probability value
///
/// All user-facing reporting goes through this bar; the estimator itself
/// never writes to the terminal.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a progress bar for a sweep of `steps` probability values
    pub fn new(steps: usize) -> Self {
        let bar = ProgressBar::new(steps as u64);
        bar.set_style(SWEEP_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Create a bar that renders nothing, for `--quiet` runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one completed estimate at occupation probability `p`
    pub fn record_point(&self, p: f64, probability: f64) {
        self.bar.set_message(format!("p={p:.2} P={probability:.3}"));
        self.bar.inc(1);
    }

    /// Finish the bar with a closing message
    pub fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }
}
