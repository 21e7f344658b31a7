//! Validates Monte Carlo estimation and probability sweeps

use percolation::algorithm::estimator::{EstimatorConfig, connection_probability};
use percolation::analysis::sweep::{probability_steps, sweep_connection_probability};
use percolation::math::probability::binomial_proportion_standard_error;
use rand::SeedableRng;
use rand::rngs::StdRng;

type TestResult = percolation::Result<()>;

#[test]
fn zero_occupation_never_percolates() -> TestResult {
    let mut rng = StdRng::seed_from_u64(1);
    let config = EstimatorConfig {
        grid_size: 5,
        trials: 50,
    };

    // At p = 0 the source corner itself is empty in every trial
    let estimate = connection_probability(0.0, &config, &mut rng)?;
    assert!(estimate.abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn full_occupation_always_percolates() -> TestResult {
    let mut rng = StdRng::seed_from_u64(2);

    for grid_size in [1, 4, 12] {
        let config = EstimatorConfig {
            grid_size,
            trials: 20,
        };
        let estimate = connection_probability(1.0, &config, &mut rng)?;
        assert!((estimate - 1.0).abs() < f64::EPSILON);
    }
    Ok(())
}

#[test]
fn estimates_increase_across_the_percolation_threshold() -> TestResult {
    let config = EstimatorConfig {
        grid_size: 50,
        trials: 500,
    };

    let mut rng_low = StdRng::seed_from_u64(3);
    let sparse = connection_probability(0.2, &config, &mut rng_low)?;

    let mut rng_high = StdRng::seed_from_u64(3);
    let dense = connection_probability(0.8, &config, &mut rng_high)?;

    // On a 50x50 grid, p = 0.2 sits far below the site percolation threshold
    // and p = 0.8 far above it; the ordering is unambiguous at 500 trials
    assert!(sparse < dense);
    assert!(sparse < 0.5);
    assert!(dense > 0.5);
    Ok(())
}

#[test]
fn fixed_seed_reproduces_the_estimate() -> TestResult {
    let config = EstimatorConfig {
        grid_size: 15,
        trials: 200,
    };

    let mut first_rng = StdRng::seed_from_u64(99);
    let first = connection_probability(0.6, &config, &mut first_rng)?;

    let mut second_rng = StdRng::seed_from_u64(99);
    let second = connection_probability(0.6, &config, &mut second_rng)?;

    assert!((first - second).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn estimates_are_valid_probabilities() -> TestResult {
    let mut rng = StdRng::seed_from_u64(5);
    let config = EstimatorConfig::default();

    for p in [-0.5, 0.0, 0.3, 0.59, 0.7, 1.0, 1.5] {
        let estimate = connection_probability(p, &config, &mut rng)?;
        assert!((0.0..=1.0).contains(&estimate));
    }
    Ok(())
}

#[test]
fn invalid_configurations_fail_fast() {
    let mut rng = StdRng::seed_from_u64(6);

    let no_trials = EstimatorConfig {
        grid_size: 10,
        trials: 0,
    };
    assert!(connection_probability(0.5, &no_trials, &mut rng).is_err());

    let no_grid = EstimatorConfig {
        grid_size: 0,
        trials: 10,
    };
    assert!(connection_probability(0.5, &no_grid, &mut rng).is_err());
}

#[test]
fn sweep_produces_one_point_per_probability_in_order() -> TestResult {
    let ps = probability_steps(0.0, 1.0, 11)?;
    let config = EstimatorConfig {
        grid_size: 8,
        trials: 40,
    };
    let mut rng = StdRng::seed_from_u64(7);

    let mut callback_count = 0;
    let points = sweep_connection_probability(&ps, &config, &mut rng, |_| {
        callback_count += 1;
    })?;

    assert_eq!(points.len(), ps.len());
    assert_eq!(callback_count, ps.len());
    for (point, &p) in points.iter().zip(&ps) {
        assert!((point.p - p).abs() < f64::EPSILON);
        let expected_error = binomial_proportion_standard_error(point.probability, config.trials);
        assert!((point.standard_error - expected_error).abs() < f64::EPSILON);
    }

    // Degenerate endpoints are exact, not statistical
    assert!(points.first().is_some_and(|pt| pt.probability.abs() < f64::EPSILON));
    assert!(
        points
            .last()
            .is_some_and(|pt| (pt.probability - 1.0).abs() < f64::EPSILON)
    );
    Ok(())
}
