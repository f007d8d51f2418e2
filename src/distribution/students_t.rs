use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::distribution::error::DistributionErr;
use crate::distribution::std_normal::{std_normal, std_normal_cdf};
use crate::error::BiaspowerErr;

/// Degrees of freedom above which the standard normal stands in for the t
/// distribution; `StudentsT::inverse_cdf` stalls for very large df
pub const NORMAL_DF_CUTOFF: f64 = 1e5;

fn standard_t(df: f64) -> Result<StudentsT, BiaspowerErr> {
    if !df.is_finite() || df < 1.0 {
        return Err(DistributionErr::BadDegreesOfFreedom(df).into());
    }
    StudentsT::new(0.0, 1.0, df).map_err(|_| DistributionErr::BadDegreesOfFreedom(df).into())
}

/// CDF of the central Student-t distribution with `df` degrees of freedom
pub fn students_t_cdf(x: f64, df: f64) -> Result<f64, BiaspowerErr> {
    let t = standard_t(df)?;
    if df > NORMAL_DF_CUTOFF {
        return Ok(std_normal_cdf(x));
    }
    Ok(t.cdf(x))
}

/// Quantile of the central Student-t distribution; `p` must lie in (0, 1)
pub fn students_t_quantile(p: f64, df: f64) -> Result<f64, BiaspowerErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DistributionErr::QuantileOutOfBounds(p).into());
    }
    let t = standard_t(df)?;
    if df > NORMAL_DF_CUTOFF {
        return Ok(std_normal()?.inverse_cdf(p));
    }
    Ok(t.inverse_cdf(p))
}
