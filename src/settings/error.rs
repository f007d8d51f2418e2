//----------------------------------------
// settings errors
//----------------------------------------
use crate::error::BiaspowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsErr {
    #[error("failed to read configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl Into<BiaspowerErr> for SettingsErr {
    fn into(self) -> BiaspowerErr {
        BiaspowerErr::Settings(self)
    }
}
