//----------------------------------------
// power query errors
//----------------------------------------
use crate::error::BiaspowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerQueryErr {
    #[error("sample size should be >= 2 (degrees of freedom >= 1); got {0}")]
    InvalidSampleSize(usize),
    #[error("significance level should be in (0, 1); got {0}")]
    InvalidSignificanceLevel(f64),
    #[error("critical value should be finite and > 0; got {0}")]
    InvalidCriticalValue(f64),
    #[error("effect size plus bias should not be NaN (effect size {effect_size}, bias {bias})")]
    NonFiniteShift { effect_size: f64, bias: f64 },
    #[error("monte carlo simulation needs at least one trial")]
    InvalidTrials,
}

impl Into<BiaspowerErr> for PowerQueryErr {
    fn into(self) -> BiaspowerErr {
        BiaspowerErr::PowerQuery(self)
    }
}
