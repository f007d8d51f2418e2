use crate::distribution::noncentral_t::noncentral_t_cdf;
use crate::error::BiaspowerErr;
use crate::power::types::{PowerQuery, Tail, to_probability};

/// Detection probability from the approximate non-central t distribution.
///
/// The shifted effect `effect_size + bias` gives a non-centrality of
/// `shifted * sqrt(n)`; power is the mass beyond the critical value (plus the
/// lower tail below `-t_crit` for two-sided queries).
pub fn analytic_probability(query: &PowerQuery) -> Result<f64, BiaspowerErr> {
    query.validate()?;
    let df = query.df();
    let t_crit = query.critical_value()?;
    let ncp = query.shifted_effect() * (query.sample_size as f64).sqrt();

    let upper = 1. - noncentral_t_cdf(t_crit, df, ncp)?;
    let power = match query.tail {
        Tail::Upper => upper,
        Tail::TwoSided => upper + noncentral_t_cdf(-t_crit, df, ncp)?,
    };
    to_probability(power, query.sample_size)
}
