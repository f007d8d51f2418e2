//----------------------------------------
// Crate error type
//----------------------------------------
use crate::curve::error::CurveErr;
use crate::distribution::error::DistributionErr;
use crate::power::error::PowerQueryErr;
use crate::settings::error::SettingsErr;
use crate::view::error::ViewErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiaspowerErr {
    #[error("while validating power query: {0}")]
    PowerQuery(PowerQueryErr),
    #[error("while evaluating distribution: {0}")]
    Distribution(DistributionErr),
    #[error("while building power curve: {0}")]
    Curve(CurveErr),
    #[error("while loading settings: {0}")]
    Settings(SettingsErr),
    #[error("while updating view: {0}")]
    View(ViewErr),
}
