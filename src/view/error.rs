//----------------------------------------
// view errors
//----------------------------------------
use crate::error::BiaspowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewErr {
    #[error("sample size {value} is outside the slider range [{min}, {max}]")]
    SampleSizeOutOfRange { value: usize, min: usize, max: usize },
    #[error("bias {value} is outside the slider range [{min}, {max}]")]
    BiasOutOfRange { value: f64, min: f64, max: f64 },
}

impl Into<BiaspowerErr> for ViewErr {
    fn into(self) -> BiaspowerErr {
        BiaspowerErr::View(self)
    }
}
