use statrs::distribution::Normal;
use statrs::function::erf::erfc;

use crate::distribution::error::DistributionErr;
use crate::error::BiaspowerErr;

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// Standard normal distribution usable as a `rand` sampler
pub fn std_normal() -> Result<Normal, BiaspowerErr> {
    Normal::new(0.0, 1.0)
        .map_err(|_| DistributionErr::BadNormalParams { mean: 0.0, sd: 1.0 }.into())
}
