/// Standard sampling error of a binomial proportion estimate
///
/// For an empirical success fraction `p_est` over `trials` independent
/// samples, the estimator's standard error is
/// `sqrt(p_est * (1 - p_est) / trials)`. Degenerate estimates (0 or 1) and
/// a zero trial count report zero error rather than NaN so callers can plot
/// error bars without special cases.
pub fn binomial_proportion_standard_error(p_est: f64, trials: usize) -> f64 {
    if trials == 0 {
        return 0.0;
    }

    let variance = p_est * (1.0 - p_est) / trials as f64;
    variance.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::binomial_proportion_standard_error;

    #[test]
    fn fair_proportion_has_maximal_error() {
        // sqrt(0.5 * 0.5 / 100) = 0.05
        let error = binomial_proportion_standard_error(0.5, 100);
        assert!((error - 0.05).abs() < 1e-12);

        assert!(binomial_proportion_standard_error(0.2, 100) < error);
        assert!(binomial_proportion_standard_error(0.8, 100) < error);
    }

    #[test]
    fn degenerate_estimates_report_zero_error() {
        assert!(binomial_proportion_standard_error(0.0, 50).abs() < f64::EPSILON);
        assert!(binomial_proportion_standard_error(1.0, 50).abs() < f64::EPSILON);
        assert!(binomial_proportion_standard_error(0.5, 0).abs() < f64::EPSILON);
    }
}
