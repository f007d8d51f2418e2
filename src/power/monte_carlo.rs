use rand::{Rng, SeedableRng, distributions::Distribution, rngs};

use crate::distribution::std_normal::std_normal;
use crate::error::BiaspowerErr;
use crate::power::error::PowerQueryErr;
use crate::power::types::{PowerQuery, Tail, to_probability};

/// Simulated detection probability with a fixed or thread-local random source
pub fn monte_carlo_probability(
    query: &PowerQuery,
    trials: usize,
    seed: Option<u64>,
) -> Result<f64, BiaspowerErr> {
    match seed {
        Some(seed) => {
            let mut rng = rngs::StdRng::seed_from_u64(seed);
            monte_carlo_probability_with(query, trials, &mut rng)
        }
        None => monte_carlo_probability_with(query, trials, &mut rand::thread_rng()),
    }
}

/// Simulates `trials` studies: each draws a sample mean of
/// `effect_size + bias + z * sqrt(1 / n)` and counts it as significant when
/// the resulting t statistic clears the critical value
pub fn monte_carlo_probability_with<R: Rng + ?Sized>(
    query: &PowerQuery,
    trials: usize,
    rng: &mut R,
) -> Result<f64, BiaspowerErr> {
    query.validate()?;
    if trials == 0 {
        return Err(PowerQueryErr::InvalidTrials.into());
    }
    let critical_value = query.critical_value()?;
    let std_err = (1. / query.sample_size as f64).sqrt();
    let shifted = query.shifted_effect();

    let significant_count = std_normal()?
        .sample_iter(rng)
        .take(trials)
        .map(|z| (shifted + z * std_err) / std_err)
        .filter(|&t_stat| match query.tail {
            Tail::Upper => t_stat > critical_value,
            Tail::TwoSided => t_stat > critical_value || t_stat < -critical_value,
        })
        .count();

    to_probability(significant_count as f64 / trials as f64, query.sample_size)
}
