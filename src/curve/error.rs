//----------------------------------------
// curve errors
//----------------------------------------
use crate::error::BiaspowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurveErr {
    #[error("grid bounds should be finite with min <= max; got [{min}, {max}]")]
    BadGridBounds { min: f64, max: f64 },
    #[error("grid step should be finite and > 0; got {0}")]
    BadGridStep(f64),
    #[error("grid would hold {0} points; at most 1000000 are allowed")]
    TooManyGridPoints(f64),
    #[error("must specify at least one significance criterion")]
    NoCriteria,
}

impl Into<BiaspowerErr> for CurveErr {
    fn into(self) -> BiaspowerErr {
        BiaspowerErr::Curve(self)
    }
}
