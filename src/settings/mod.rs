//----------------------------------------
// settings mod
//----------------------------------------
pub mod error;
pub mod types;

use std::path::Path;

use crate::error::BiaspowerErr;
use crate::settings::error::SettingsErr;
pub use types::{GridSettings, Settings, SimulationSettings, SliderSettings};

pub const DEFAULT_CONFIG_FILE: &str = "biaspower.toml";
pub const ENV_PREFIX: &str = "BIASPOWER";

/// Loads settings from built-in defaults, then the TOML file at `path` (or
/// `biaspower.toml` in the working directory) if it exists, then
/// `BIASPOWER__*` environment variables, e.g. `BIASPOWER__GRID__STEP=0.05`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, BiaspowerErr> {
    let file = match path {
        Some(path) => ::config::File::from(path).required(true),
        None => ::config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let settings = ::config::Config::builder()
        .add_source(file)
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|built| built.try_deserialize::<Settings>())
        .map_err(|e| -> BiaspowerErr { SettingsErr::from(e).into() })?;

    settings.validate()?;
    Ok(settings)
}
