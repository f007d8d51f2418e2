use serde::{Deserialize, Serialize};

use crate::curve::types::EffectSizeGrid;
use crate::error::BiaspowerErr;
use crate::power::types::{Criterion, Strategy, Tail};
use crate::settings::error::SettingsErr;

pub const GRID_MIN: f64 = -2.0;
pub const GRID_MAX: f64 = 2.0;
pub const GRID_STEP: f64 = 0.01;
pub const TRIALS: usize = 1000;
pub const ALPHA: f64 = 0.05;

/// Root settings; every section falls back to its defaults when omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub simulation: SimulationSettings,
    /// Significance level of the unbiased curve and the first biased curve
    pub alpha: f64,
    /// Additional significance levels, each adding one biased curve
    pub extra_alphas: Vec<f64>,
    pub tail: Tail,
    pub sliders: SliderSettings,
}

/// Effect-size sweep along the x axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Use the Monte-Carlo strategy instead of the analytic one
    pub monte_carlo: bool,
    pub trials: usize,
    pub seed: Option<u64>,
}

/// Accepted ranges for the two user-controlled parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    pub sample_size_min: usize,
    pub sample_size_max: usize,
    pub bias_min: f64,
    pub bias_max: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            simulation: SimulationSettings::default(),
            alpha: ALPHA,
            extra_alphas: Vec::new(),
            tail: Tail::Upper,
            sliders: SliderSettings::default(),
        }
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            min: GRID_MIN,
            max: GRID_MAX,
            step: GRID_STEP,
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            monte_carlo: false,
            trials: TRIALS,
            seed: None,
        }
    }
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            sample_size_min: 5,
            sample_size_max: 100,
            bias_min: 0.,
            bias_max: 1.,
        }
    }
}

impl Settings {
    pub fn grid(&self) -> Result<EffectSizeGrid, BiaspowerErr> {
        EffectSizeGrid::new(self.grid.min, self.grid.max, self.grid.step)
    }

    pub fn criteria(&self) -> Vec<Criterion> {
        std::iter::once(self.alpha)
            .chain(self.extra_alphas.iter().copied())
            .map(Criterion::Alpha)
            .collect()
    }

    pub fn strategy(&self) -> Strategy {
        if self.simulation.monte_carlo {
            Strategy::MonteCarlo {
                trials: self.simulation.trials,
                seed: self.simulation.seed,
            }
        } else {
            Strategy::Analytic
        }
    }

    pub fn validate(&self) -> Result<(), BiaspowerErr> {
        let invalid = |msg: String| -> Result<(), BiaspowerErr> {
            Err(SettingsErr::Validation(msg).into())
        };

        if let Some(alpha) = self.criteria().into_iter().find_map(|c| match c {
            Criterion::Alpha(a) if !(a > 0. && a < 1.) => Some(a),
            _ => None,
        }) {
            return invalid(format!("significance levels should be in (0, 1); got {alpha}"));
        }
        if self.simulation.trials == 0 {
            return invalid(String::from("simulation trials should be >= 1"));
        }
        let SliderSettings {
            sample_size_min,
            sample_size_max,
            bias_min,
            bias_max,
        } = self.sliders;
        if sample_size_min < 2 || sample_size_min > sample_size_max {
            return invalid(format!(
                "sample size range should satisfy 2 <= min <= max; \
                got [{sample_size_min}, {sample_size_max}]"
            ));
        }
        if !bias_min.is_finite() || !bias_max.is_finite() || bias_min > bias_max {
            return invalid(format!(
                "bias range should be finite with min <= max; got [{bias_min}, {bias_max}]"
            ));
        }
        self.grid().map(|_| ())
    }
}
