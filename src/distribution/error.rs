//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::BiaspowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistributionErr {
    #[error("degrees of freedom should be finite and >= 1; got {0}")]
    BadDegreesOfFreedom(f64),
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("normal distribution parameters rejected (mean {mean}, sd {sd})")]
    BadNormalParams { mean: f64, sd: f64 },
}

impl Into<BiaspowerErr> for DistributionErr {
    fn into(self) -> BiaspowerErr {
        BiaspowerErr::Distribution(self)
    }
}
