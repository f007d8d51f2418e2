//----------------------------------------
// curve mod
//----------------------------------------
pub mod build;
pub mod error;
pub mod types;

pub use build::{build_curves, curve};
pub use types::{EffectSizeGrid, PowerCurve};
