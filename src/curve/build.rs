use itertools::izip;
use tracing::debug;

use crate::curve::error::CurveErr;
use crate::curve::types::{EffectSizeGrid, PowerCurve};
use crate::error::BiaspowerErr;
use crate::power::compute::detection_probability;
use crate::power::types::{Criterion, PowerQuery, Strategy, Tail};

pub const UNBIASED_COLOR: &str = "#00C802";
pub const BIASED_COLORS: [&str; 3] = ["#FF5A00", "#C70039", "#900C3F"];

/// Sweeps the grid through the calculator: `[(x, P(x, bias, n, criterion))]`
/// in grid order
pub fn curve(
    grid: &EffectSizeGrid,
    bias: f64,
    sample_size: usize,
    criterion: Criterion,
    tail: Tail,
    strategy: &Strategy,
) -> Result<Vec<(f64, f64)>, BiaspowerErr> {
    grid.points()
        .iter()
        .enumerate()
        .map(|(i, &effect_size)| {
            let query = PowerQuery::new(effect_size, bias, sample_size, criterion).with_tail(tail);
            let probability = detection_probability(&query, &point_strategy(strategy, i))?;
            Ok((effect_size, probability))
        })
        .collect()
}

// Seeded simulations get a distinct stream per grid point so that
// neighbouring points aren't driven by identical noise
fn point_strategy(strategy: &Strategy, index: usize) -> Strategy {
    match *strategy {
        Strategy::MonteCarlo {
            trials,
            seed: Some(seed),
        } => Strategy::MonteCarlo {
            trials,
            seed: Some(seed.wrapping_add(index as u64)),
        },
        other => other,
    }
}

/// One unbiased curve at the first criterion, then one biased curve per
/// criterion
pub fn build_curves(
    grid: &EffectSizeGrid,
    bias: f64,
    sample_size: usize,
    criteria: &[Criterion],
    tail: Tail,
    strategy: &Strategy,
) -> Result<Vec<PowerCurve>, BiaspowerErr> {
    let Some(&first_criterion) = criteria.first() else {
        return Err(CurveErr::NoCriteria.into());
    };
    debug!(
        bias,
        sample_size,
        n_criteria = criteria.len(),
        grid_points = grid.len(),
        ?strategy,
        "building power curves"
    );

    let mut curves = Vec::with_capacity(criteria.len() + 1);
    curves.push(PowerCurve {
        label: String::from("Unbiased"),
        color: String::from(UNBIASED_COLOR),
        bias: 0.,
        criterion: first_criterion,
        points: curve(grid, 0., sample_size, first_criterion, tail, strategy)?,
    });

    let single = criteria.len() == 1;
    for (&criterion, color) in izip!(criteria, BIASED_COLORS.iter().cycle()) {
        let label = if single {
            String::from("Biased")
        } else {
            format!("Biased ({})", criterion_label(criterion))
        };
        curves.push(PowerCurve {
            label,
            color: String::from(*color),
            bias,
            criterion,
            points: curve(grid, bias, sample_size, criterion, tail, strategy)?,
        });
    }
    Ok(curves)
}

fn criterion_label(criterion: Criterion) -> String {
    match criterion {
        Criterion::Alpha(alpha) => format!("alpha = {alpha}"),
        Criterion::CriticalValue(c) => format!("critical value = {c}"),
    }
}
