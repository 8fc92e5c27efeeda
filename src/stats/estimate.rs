//! Point estimates and error bars for bar and point plots.
//!
//! Reductions go through `trueno::Vector` so they pick up the SIMD backend.

use crate::stats::boxstats::{percentile, sorted_finite};
use rand::Rng;
use trueno::Vector;

/// Mean of `data`, or `None` when empty.
#[must_use]
pub fn mean(data: &[f32]) -> Option<f32> {
    if data.is_empty() {
        return None;
    }
    Vector::from_vec(data.to_vec()).mean().ok()
}

/// Smallest and largest value, or `None` when empty.
#[must_use]
pub fn min_max(data: &[f32]) -> Option<(f32, f32)> {
    if data.is_empty() {
        return None;
    }
    let v = Vector::from_vec(data.to_vec());
    Some((v.min().ok()?, v.max().ok()?))
}

/// Sample standard deviation (n - 1 denominator); 0 for one observation.
#[must_use]
pub fn std_dev(data: &[f32]) -> Option<f32> {
    let m = mean(data)?;
    if data.len() < 2 {
        return Some(0.0);
    }
    let ss: f32 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Some((ss / (data.len() - 1) as f32).sqrt())
}

/// Central-tendency statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Estimator {
    /// Arithmetic mean.
    #[default]
    Mean,
    /// Median.
    Median,
    /// Sum.
    Sum,
    /// Minimum.
    Min,
    /// Maximum.
    Max,
}

impl Estimator {
    /// Apply the estimator to finite data. `None` when `data` is empty.
    #[must_use]
    pub fn apply(self, data: &[f32]) -> Option<f32> {
        if data.is_empty() {
            return None;
        }
        match self {
            Estimator::Mean => mean(data),
            Estimator::Median => Some(percentile(&sorted_finite(data), 50.0)),
            Estimator::Sum => Some(data.iter().sum()),
            Estimator::Min => Vector::from_vec(data.to_vec()).min().ok(),
            Estimator::Max => Vector::from_vec(data.to_vec()).max().ok(),
        }
    }
}

/// Error bar method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ErrorBar {
    /// No error bar.
    None,
    /// Bootstrap confidence interval at the given percent level.
    Ci(f32),
    /// Percentile interval of the data at the given percent level.
    Pi(f32),
    /// Estimate plus/minus a multiple of the standard deviation.
    Sd(f32),
    /// Estimate plus/minus a multiple of the standard error.
    Se(f32),
}

impl Default for ErrorBar {
    fn default() -> Self {
        ErrorBar::Ci(95.0)
    }
}

/// An aggregated group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    /// Point estimate.
    pub estimate: f32,
    /// Error bar interval, if requested and computable.
    pub interval: Option<(f32, f32)>,
    /// Number of observations.
    pub n: usize,
}

/// Aggregate one group of observations.
///
/// Non-finite values are ignored. Returns `None` when nothing finite remains.
pub fn aggregate<R: Rng + ?Sized>(
    data: &[f32],
    estimator: Estimator,
    errorbar: ErrorBar,
    n_boot: usize,
    rng: &mut R,
) -> Option<Aggregate> {
    let clean: Vec<f32> = data.iter().copied().filter(|x| x.is_finite()).collect();
    let estimate = estimator.apply(&clean)?;
    let n = clean.len();

    let interval = match errorbar {
        ErrorBar::None => None,
        ErrorBar::Ci(level) => bootstrap_ci(&clean, estimator, level, n_boot, rng),
        ErrorBar::Pi(level) => {
            let sorted = sorted_finite(&clean);
            let tail = (100.0 - level.clamp(0.0, 100.0)) / 2.0;
            Some((percentile(&sorted, tail), percentile(&sorted, 100.0 - tail)))
        }
        ErrorBar::Sd(scale) => std_dev(&clean).map(|sd| (estimate - scale * sd, estimate + scale * sd)),
        ErrorBar::Se(scale) => std_dev(&clean).map(|sd| {
            let se = sd / (n as f32).sqrt();
            (estimate - scale * se, estimate + scale * se)
        }),
    };

    Some(Aggregate { estimate, interval, n })
}

/// Percentile bootstrap confidence interval of `estimator` over `data`.
///
/// Returns `None` for fewer than two observations or zero resamples.
pub fn bootstrap_ci<R: Rng + ?Sized>(
    data: &[f32],
    estimator: Estimator,
    level: f32,
    n_boot: usize,
    rng: &mut R,
) -> Option<(f32, f32)> {
    let n = data.len();
    if n < 2 || n_boot == 0 {
        return None;
    }

    let mut sample = vec![0.0f32; n];
    let mut boots: Vec<f32> = (0..n_boot)
        .filter_map(|_| {
            for slot in sample.iter_mut() {
                *slot = data[rng.gen_range(0..n)];
            }
            estimator.apply(&sample)
        })
        .collect();
    boots.sort_by(f32::total_cmp);

    let tail = (100.0 - level.clamp(0.0, 100.0)) / 2.0;
    Some((percentile(&boots, tail), percentile(&boots, 100.0 - tail)))
}
