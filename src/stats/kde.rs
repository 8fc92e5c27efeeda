//! Gaussian kernel density estimation for violins.

use crate::stats::estimate::{mean, std_dev};

/// Bandwidth rule. The bandwidth is `factor * sample standard deviation`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Bandwidth {
    /// Scott's rule: `n^(-1/5)`.
    #[default]
    Scott,
    /// Silverman's rule: `(n * 3/4)^(-1/5)`.
    Silverman,
    /// Explicit factor.
    Factor(f32),
}

impl Bandwidth {
    /// Multiplier applied to the standard deviation for `n` observations.
    #[must_use]
    pub fn factor(self, n: usize) -> f32 {
        let n = n.max(1) as f32;
        match self {
            Bandwidth::Scott => n.powf(-0.2),
            Bandwidth::Silverman => (n * 0.75).powf(-0.2),
            Bandwidth::Factor(f) => f,
        }
    }
}

/// A density curve evaluated on an evenly spaced support grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Kde {
    /// Evaluation points, ascending.
    pub support: Vec<f32>,
    /// Density at each support point (integrates to ~1).
    pub density: Vec<f32>,
    /// Kernel bandwidth in data units (0 for degenerate data).
    pub bandwidth: f32,
    /// Number of observations.
    pub n: usize,
}

impl Kde {
    /// Estimate the density of `data`.
    ///
    /// The support extends `cut` bandwidths past the data on both sides.
    /// Data with a single distinct value yields a one-point curve with
    /// density 1 and bandwidth 0. Returns `None` when there is no finite
    /// value.
    #[must_use]
    pub fn fit(data: &[f32], bw: Bandwidth, cut: f32, gridsize: usize) -> Option<Self> {
        let clean: Vec<f32> = data.iter().copied().filter(|x| x.is_finite()).collect();
        if clean.is_empty() {
            return None;
        }
        let n = clean.len();

        let min_val = clean.iter().copied().fold(f32::MAX, f32::min);
        let max_val = clean.iter().copied().fold(f32::MIN, f32::max);
        let h = bw.factor(n) * std_dev(&clean).unwrap_or(0.0);

        if max_val - min_val <= f32::EPSILON || h <= 0.0 || !h.is_finite() {
            return Some(Self {
                support: vec![mean(&clean).unwrap_or(min_val)],
                density: vec![1.0],
                bandwidth: 0.0,
                n,
            });
        }

        let gridsize = gridsize.max(2);
        let x_min = min_val - cut.max(0.0) * h;
        let x_max = max_val + cut.max(0.0) * h;
        let step = (x_max - x_min) / (gridsize - 1) as f32;
        let norm = 1.0 / (n as f32 * h * (2.0 * std::f32::consts::PI).sqrt());

        let support: Vec<f32> = (0..gridsize).map(|i| x_min + i as f32 * step).collect();
        let density = support
            .iter()
            .map(|&x| {
                clean
                    .iter()
                    .map(|&xi| {
                        let u = (x - xi) / h;
                        (-0.5 * u * u).exp()
                    })
                    .sum::<f32>()
                    * norm
            })
            .collect();

        Some(Self {
            support,
            density,
            bandwidth: h,
            n,
        })
    }

    /// Largest density value.
    #[must_use]
    pub fn max_density(&self) -> f32 {
        self.density.iter().copied().fold(0.0, f32::max)
    }

    /// Whether the curve collapsed to a single point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.support.len() < 2
    }
}
