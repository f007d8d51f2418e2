use crate::distribution::error::DistributionErr;
use crate::distribution::std_normal::std_normal_cdf;
use crate::distribution::students_t::students_t_cdf;
use crate::error::BiaspowerErr;

/// Non-centrality below which the distribution is treated as exactly central
pub const CENTRAL_NCP_EPS: f64 = 1e-10;

/// Approximate CDF of the non-central t distribution.
///
/// Near-zero non-centrality falls back to the central Student-t CDF. Otherwise
/// the normal substitution `z = (x - ncp) / sqrt(1 + x^2 / (2 df))` is used.
/// This is rough for small `df` and is kept that way so curves stay stable for
/// a fixed input.
pub fn noncentral_t_cdf(x: f64, df: f64, ncp: f64) -> Result<f64, BiaspowerErr> {
    if ncp.abs() < CENTRAL_NCP_EPS {
        return students_t_cdf(x, df);
    }
    if !df.is_finite() || df < 1.0 {
        return Err(DistributionErr::BadDegreesOfFreedom(df).into());
    }
    let z = (x - ncp) / (1. + x * x / (2. * df)).sqrt();
    Ok(std_normal_cdf(z))
}
