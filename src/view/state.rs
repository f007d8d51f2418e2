use tracing::{debug, warn};

use crate::curve::build::build_curves;
use crate::curve::types::{EffectSizeGrid, PowerCurve};
use crate::error::BiaspowerErr;
use crate::power::types::Strategy;
use crate::settings::Settings;
use crate::view::error::ViewErr;

/// Owns the two user-controlled parameters and the curves last computed from
/// them. A rejected update leaves both the parameters and the curves as they
/// were.
#[derive(Debug, Clone)]
pub struct PowerView {
    settings: Settings,
    grid: EffectSizeGrid,
    strategy: Strategy,
    sample_size: usize,
    bias: f64,
    curves: Vec<PowerCurve>,
}

impl PowerView {
    /// Starts at the lower end of both slider ranges
    pub fn new(settings: Settings) -> Result<Self, BiaspowerErr> {
        settings.validate()?;
        let grid = settings.grid()?;
        let strategy = settings.strategy();
        let sample_size = settings.sliders.sample_size_min;
        let bias = settings.sliders.bias_min;
        let mut view = PowerView {
            settings,
            grid,
            strategy,
            sample_size,
            bias,
            curves: Vec::new(),
        };
        view.curves = view.compute(sample_size, bias)?;
        Ok(view)
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn curves(&self) -> &[PowerCurve] {
        &self.curves
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn grid(&self) -> &EffectSizeGrid {
        &self.grid
    }

    pub fn set_sample_size(&mut self, sample_size: usize) -> Result<&[PowerCurve], BiaspowerErr> {
        let sliders = self.settings.sliders;
        if sample_size < sliders.sample_size_min || sample_size > sliders.sample_size_max {
            warn!(sample_size, "rejected sample size update");
            return Err(ViewErr::SampleSizeOutOfRange {
                value: sample_size,
                min: sliders.sample_size_min,
                max: sliders.sample_size_max,
            }
            .into());
        }
        self.update(sample_size, self.bias)
    }

    pub fn set_bias(&mut self, bias: f64) -> Result<&[PowerCurve], BiaspowerErr> {
        let sliders = self.settings.sliders;
        if !(sliders.bias_min..=sliders.bias_max).contains(&bias) {
            warn!(bias, "rejected bias update");
            return Err(ViewErr::BiasOutOfRange {
                value: bias,
                min: sliders.bias_min,
                max: sliders.bias_max,
            }
            .into());
        }
        self.update(self.sample_size, bias)
    }

    fn update(&mut self, sample_size: usize, bias: f64) -> Result<&[PowerCurve], BiaspowerErr> {
        match self.compute(sample_size, bias) {
            Ok(curves) => {
                self.sample_size = sample_size;
                self.bias = bias;
                self.curves = curves;
                Ok(&self.curves)
            }
            Err(e) => {
                warn!(sample_size, bias, error = %e, "keeping previous curves");
                Err(e)
            }
        }
    }

    fn compute(&self, sample_size: usize, bias: f64) -> Result<Vec<PowerCurve>, BiaspowerErr> {
        debug!(sample_size, bias, "recomputing view");
        build_curves(
            &self.grid,
            bias,
            sample_size,
            &self.settings.criteria(),
            self.settings.tail,
            &self.strategy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> Settings {
        let mut settings = Settings::default();
        settings.grid.min = -1.;
        settings.grid.max = 1.;
        settings.grid.step = 0.1;
        settings
    }

    #[test]
    fn starts_at_slider_minimums() {
        let view = PowerView::new(Settings::default()).expect("failed to build view");
        assert_eq!(view.sample_size(), 5);
        assert_eq!(view.bias(), 0.);
        assert_eq!(view.curves().len(), 2);
        assert_eq!(view.curves()[0].points.len(), 401);
        // With zero bias both curves coincide
        assert_eq!(view.curves()[0].points, view.curves()[1].points);
    }

    #[test]
    fn updates_recompute_curves() {
        let mut view = PowerView::new(small_settings()).unwrap();
        let before = view.curves()[1].points.clone();
        view.set_bias(0.5).expect("failed to set bias");
        view.set_sample_size(40).expect("failed to set sample size");
        assert_eq!(view.bias(), 0.5);
        assert_eq!(view.sample_size(), 40);
        assert_ne!(view.curves()[1].points, before);
        assert!(
            view.curves()
                .iter()
                .all(|c| c.points.iter().all(|&(_, p)| (0. ..=1.).contains(&p)))
        );
    }

    #[test]
    fn rejected_update_keeps_last_valid_curves() {
        let mut view = PowerView::new(small_settings()).unwrap();
        view.set_bias(0.3).unwrap();
        let snapshot = view.curves().to_vec();

        assert!(view.set_sample_size(1).is_err());
        assert!(view.set_sample_size(101).is_err());
        assert!(view.set_bias(-0.1).is_err());
        assert!(view.set_bias(f64::NAN).is_err());

        assert_eq!(view.sample_size(), 5);
        assert_eq!(view.bias(), 0.3);
        assert_eq!(view.curves(), snapshot.as_slice());
    }

    #[test]
    fn out_of_range_message() {
        let mut view = PowerView::new(small_settings()).unwrap();
        if let Err(e) = view.set_sample_size(400) {
            assert_eq!(
                String::from(
                    "while updating view: sample size 400 is outside the slider range [5, 100]"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn wider_slider_range_from_settings() {
        let mut settings = small_settings();
        settings.sliders.sample_size_max = 500;
        let mut view = PowerView::new(settings).unwrap();
        view.set_sample_size(500).expect("500 should be allowed");
    }
}
