//----------------------------------------
// Root lib
//----------------------------------------
//! Detection-probability curves for a one-sample t test, showing how a
//! systematic bias added to the true effect size inflates the chance of a
//! "significant" result, and how that depends on sample size.

/// Probability of a significant result for a given effect size, bias,
/// sample size and criterion
pub mod power;
/// Sweeps over effect sizes, producing chart-ready series
pub mod curve;
/// Normal, Student-t and approximate non-central t distribution functions
pub mod distribution;
/// This module contains error types
pub mod error;
/// Settings loaded from defaults, a TOML file and the environment
pub mod settings;
/// Owner of the user-controlled parameters and the curves derived from them
pub mod view;

pub use curve::{EffectSizeGrid, PowerCurve, build_curves};
pub use error::BiaspowerErr;
pub use power::{
    Criterion, PowerQuery, Strategy, Tail, compute_detection_probability, detection_probability,
};
pub use settings::{Settings, load_settings};
pub use view::PowerView;
