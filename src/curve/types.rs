//----------------------------------------
// curve mod types
//----------------------------------------
use itertools::Itertools;
use serde::Serialize;

use crate::curve::error::CurveErr;
use crate::error::BiaspowerErr;
use crate::power::types::Criterion;

pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Effect sizes swept along the x axis: `min, min + step, ...` up to `max`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectSizeGrid {
    min: f64,
    max: f64,
    step: f64,
    points: Vec<f64>,
}

impl EffectSizeGrid {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, BiaspowerErr> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(CurveErr::BadGridBounds { min, max }.into());
        }
        if !step.is_finite() || step <= 0. {
            return Err(CurveErr::BadGridStep(step).into());
        }
        // Small slack so that e.g. 4 / 0.01 still reaches the upper bound
        let n_steps = ((max - min) / step + 1e-9).floor();
        // An overflowing span gives an infinite step count
        if !n_steps.is_finite() || n_steps >= MAX_GRID_POINTS as f64 {
            return Err(CurveErr::TooManyGridPoints(n_steps + 1.).into());
        }
        let points = (0..=n_steps as usize)
            .map(|i| min + (i as f64) * step)
            .collect_vec();
        Ok(EffectSizeGrid {
            min,
            max,
            step,
            points,
        })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

/// One chart series: (effect size, detection probability) pairs in grid
/// order, with the label and color the chart should use
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerCurve {
    pub label: String,
    pub color: String,
    pub bias: f64,
    pub criterion: Criterion,
    pub points: Vec<(f64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_401_points() {
        let grid = EffectSizeGrid::new(-2., 2., 0.01).expect("failed to build grid");
        assert_eq!(grid.len(), 401);
        assert_eq!(grid.points()[0], -2.);
        assert!((grid.points()[400] - 2.).abs() < 1e-9);
        assert!(grid.points().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn grid_does_not_pass_max() {
        let grid = EffectSizeGrid::new(-1., 1., 0.45).unwrap();
        assert_eq!(grid.len(), 5);
        assert!(*grid.points().last().unwrap() <= 1.)
    }

    #[test]
    fn single_point_grid() {
        let grid = EffectSizeGrid::new(0.5, 0.5, 0.1).unwrap();
        assert_eq!(grid.points(), &[0.5])
    }

    #[test]
    fn bad_grids_rejected() {
        assert!(EffectSizeGrid::new(2., -2., 0.01).is_err());
        assert!(EffectSizeGrid::new(-2., 2., 0.).is_err());
        assert!(EffectSizeGrid::new(-2., 2., -0.1).is_err());
        assert!(EffectSizeGrid::new(f64::NAN, 2., 0.1).is_err());
        assert!(EffectSizeGrid::new(-2., 2., 1e-9).is_err());
    }

    #[test]
    fn overflowing_span_rejected() {
        if let Err(e) = EffectSizeGrid::new(-1e308, 1e308, 1.0) {
            assert_eq!(
                String::from(
                    "while building power curve: grid would hold inf points; \
                    at most 1000000 are allowed"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bad_step_message() {
        if let Err(e) = EffectSizeGrid::new(-2., 2., 0.) {
            assert_eq!(
                String::from(
                    "while building power curve: grid step should be finite and > 0; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
