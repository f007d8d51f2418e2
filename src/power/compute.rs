use tracing::trace;

use crate::error::BiaspowerErr;
use crate::power::analytic::analytic_probability;
use crate::power::monte_carlo::monte_carlo_probability;
use crate::power::types::{Criterion, PowerQuery, Strategy};

/// Probability that a one-sided (upper) one-sample t test detects a
/// significant result when the data are centered at `effect_size + bias`.
/// Uses the analytic approximation.
pub fn compute_detection_probability(
    effect_size: f64,
    bias: f64,
    sample_size: usize,
    criterion: Criterion,
) -> Result<f64, BiaspowerErr> {
    detection_probability(
        &PowerQuery::new(effect_size, bias, sample_size, criterion),
        &Strategy::Analytic,
    )
}

pub fn detection_probability(
    query: &PowerQuery,
    strategy: &Strategy,
) -> Result<f64, BiaspowerErr> {
    let probability = match *strategy {
        Strategy::Analytic => analytic_probability(query)?,
        Strategy::MonteCarlo { trials, seed } => monte_carlo_probability(query, trials, seed)?,
    };
    trace!(?query, ?strategy, probability, "computed detection probability");
    Ok(probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_null_scenario() {
        let p = compute_detection_probability(0., 0., 5, Criterion::Alpha(0.05))
            .expect("failed to compute detection probability");
        assert!((p - 0.05).abs() < 0.001)
    }

    #[test]
    fn concrete_large_effect_scenario() {
        let p = compute_detection_probability(1., 0., 30, Criterion::Alpha(0.05)).unwrap();
        assert!(p > 0.8)
    }

    #[test]
    fn concrete_bias_scenario() {
        let p = compute_detection_probability(0., 0.5, 20, Criterion::Alpha(0.05)).unwrap();
        assert!(p > 0.05)
    }

    #[test]
    fn strategies_agree_roughly() {
        let q = PowerQuery::new(0.15, 0.1, 100, Criterion::Alpha(0.05));
        let analytic = detection_probability(&q, &Strategy::Analytic).unwrap();
        let simulated = detection_probability(
            &q,
            &Strategy::MonteCarlo {
                trials: 20_000,
                seed: Some(24601),
            },
        )
        .unwrap();
        assert!((analytic - simulated).abs() < 0.03)
    }

    #[test]
    fn large_sample_sizes_return() {
        for n in [10_000, 10_000_000, 100_000_000, 1_000_000_000] {
            let p = compute_detection_probability(0.01, 0., n, Criterion::Alpha(0.05))
                .expect("failed to compute detection probability");
            assert!((0. ..=1.).contains(&p), "n {n}: {p}");
        }
    }

    #[test]
    fn invalid_input_surfaces_error() {
        assert!(compute_detection_probability(0., 0., 1, Criterion::Alpha(0.05)).is_err());
        assert!(compute_detection_probability(0., 0., 10, Criterion::Alpha(1.)).is_err());
        assert!(compute_detection_probability(0., 0., 10, Criterion::CriticalValue(0.)).is_err());
    }
}
