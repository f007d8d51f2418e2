//----------------------------------------
// power mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::distribution::students_t::students_t_quantile;
use crate::error::BiaspowerErr;
use crate::power::error::PowerQueryErr;

/// Significance criterion, either as a nominal alpha or as a test-statistic
/// threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Alpha(f64),
    CriticalValue(f64),
}

#[derive(Default, Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tail {
    #[default]
    Upper,
    TwoSided,
}

#[derive(Default, Debug, PartialEq, Clone, Copy)]
pub enum Strategy {
    #[default]
    Analytic,
    /// `seed: None` draws from the thread-local generator
    MonteCarlo { trials: usize, seed: Option<u64> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerQuery {
    pub effect_size: f64,
    pub bias: f64,
    pub sample_size: usize,
    pub criterion: Criterion,
    pub tail: Tail,
}

impl PowerQuery {
    pub fn new(effect_size: f64, bias: f64, sample_size: usize, criterion: Criterion) -> Self {
        PowerQuery {
            effect_size,
            bias,
            sample_size,
            criterion,
            tail: Tail::Upper,
        }
    }

    pub fn with_tail(self, tail: Tail) -> Self {
        PowerQuery { tail, ..self }
    }

    pub fn shifted_effect(&self) -> f64 {
        self.effect_size + self.bias
    }

    pub fn df(&self) -> f64 {
        (self.sample_size as f64) - 1.
    }

    /// Rejects queries with no meaningful t distribution or criterion
    pub fn validate(&self) -> Result<(), BiaspowerErr> {
        if self.sample_size < 2 {
            return Err(PowerQueryErr::InvalidSampleSize(self.sample_size).into());
        }
        match self.criterion {
            Criterion::Alpha(alpha) if !(alpha > 0. && alpha < 1.) => {
                return Err(PowerQueryErr::InvalidSignificanceLevel(alpha).into());
            }
            Criterion::CriticalValue(c) if !(c.is_finite() && c > 0.) => {
                return Err(PowerQueryErr::InvalidCriticalValue(c).into());
            }
            _ => {}
        }
        if self.shifted_effect().is_nan() {
            return Err(PowerQueryErr::NonFiniteShift {
                effect_size: self.effect_size,
                bias: self.bias,
            }
            .into());
        }
        Ok(())
    }

    /// Test-statistic threshold; alpha resolves to the one-sided Student-t
    /// quantile at `1 - alpha` with `n - 1` degrees of freedom
    pub fn critical_value(&self) -> Result<f64, BiaspowerErr> {
        match self.criterion {
            Criterion::Alpha(alpha) => {
                // Taken from the lower tail so that `1 - alpha` never rounds to 1
                let t_crit = -students_t_quantile(alpha, self.df())?;
                if !t_crit.is_finite() {
                    return Err(PowerQueryErr::InvalidSignificanceLevel(alpha).into());
                }
                Ok(t_crit)
            }
            Criterion::CriticalValue(c) => Ok(c),
        }
    }
}

/// Turns a raw tail sum into a probability. Non-finite values only arise from
/// a degenerate sample size, so they're reported as such.
pub(crate) fn to_probability(raw: f64, sample_size: usize) -> Result<f64, BiaspowerErr> {
    if !raw.is_finite() {
        return Err(PowerQueryErr::InvalidSampleSize(sample_size).into());
    }
    Ok(raw.clamp(0., 1.))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_size_one_rejected() {
        let query = PowerQuery::new(0.5, 0., 1, Criterion::Alpha(0.05));
        if let Err(e) = query.validate() {
            assert_eq!(
                String::from(
                    "while validating power query: sample size should be >= 2 \
                    (degrees of freedom >= 1); got 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bad_alpha_rejected() {
        for alpha in [0., 1., -0.1, 1.5, f64::NAN] {
            let query = PowerQuery::new(0., 0., 10, Criterion::Alpha(alpha));
            assert!(query.validate().is_err(), "alpha {alpha} accepted");
        }
    }

    #[test]
    fn bad_critical_value_rejected() {
        for c in [0., -1.645, f64::INFINITY, f64::NAN] {
            let query = PowerQuery::new(0., 0., 10, Criterion::CriticalValue(c));
            assert!(query.validate().is_err(), "critical value {c} accepted");
        }
    }

    #[test]
    fn nan_shift_rejected() {
        let query = PowerQuery::new(f64::INFINITY, f64::NEG_INFINITY, 10, Criterion::Alpha(0.05));
        assert!(query.validate().is_err());
    }

    #[test]
    fn critical_value_from_alpha() {
        let query = PowerQuery::new(0., 0., 5, Criterion::Alpha(0.05));
        let c = query.critical_value().expect("failed to compute critical value");
        assert!((c - 2.1318).abs() < 0.001);

        let direct = PowerQuery::new(0., 0., 5, Criterion::CriticalValue(1.645));
        assert_eq!(direct.critical_value().unwrap(), 1.645);
    }

    #[test]
    fn tiny_alpha_gives_large_critical_value() {
        let query = PowerQuery::new(0.5, 0., 20, Criterion::Alpha(1e-17));
        let c = query.critical_value().expect("failed to compute critical value");
        assert!(c.is_finite() && c > 10.)
    }

    #[test]
    fn huge_sample_size_critical_value() {
        let query = PowerQuery::new(0.01, 0., 100_000_000, Criterion::Alpha(0.05));
        let c = query.critical_value().expect("failed to compute critical value");
        assert!((c - 1.644854).abs() < 0.0001)
    }

    #[test]
    fn probability_clamped_and_nan_rejected() {
        assert_eq!(to_probability(1.0000001, 10).unwrap(), 1.);
        assert_eq!(to_probability(-1e-17, 10).unwrap(), 0.);
        assert!(to_probability(f64::NAN, 0).is_err());
    }
}
