//! Letter-value statistics for boxen plots.
//!
//! Box `i` (innermost first) spans the `0.5^(i+2)` and `1 - 0.5^(i+2)`
//! quantiles: fourths, eighths, sixteenths and so on. The number of boxes
//! is chosen by a [`KDepth`] rule.
//!
//! # References
//!
//! - Hofmann, H., Wickham, H., & Kafadar, K. (2017). "Letter-Value Plots:
//!   Boxplots for Large Data." *Journal of Computational and Graphical
//!   Statistics*, 26(3), 469-477.

use crate::stats::boxstats::{percentile, sorted_finite};

/// Two-sided 95% standard normal quantile.
const Z_975: f32 = 1.959_964;

/// Rule for the number of letter-value boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum KDepth {
    /// `floor(log2 n) - 3`: roughly 5-8 outliers per tail.
    Tukey,
    /// Leave about this fraction of the data as outliers.
    Proportion(f32),
    /// Stop where the letter values lose confidence at this alpha.
    Trustworthy(f32),
    /// Every possible level; the outermost box reaches min and max.
    Full,
    /// Exactly this many boxes.
    Fixed(usize),
}

impl Default for KDepth {
    fn default() -> Self {
        KDepth::Tukey
    }
}

impl KDepth {
    /// Number of boxes for `n` observations (at least 1).
    #[must_use]
    pub fn depth(self, n: usize) -> usize {
        let n = n.max(1) as f32;
        let log2n = n.log2().trunc() as i64;
        let k = match self {
            KDepth::Tukey => log2n - 3,
            KDepth::Proportion(prop) => log2n - (n * prop).log2().trunc() as i64 + 1,
            KDepth::Trustworthy(alpha) => {
                let z = if (alpha - 0.05).abs() < f32::EPSILON {
                    Z_975
                } else {
                    normal_quantile(1.0 - alpha / 2.0)
                };
                let point_conf = 2.0 * z * z;
                (n / point_conf).log2().trunc() as i64 + 1
            }
            KDepth::Full => log2n + 1,
            KDepth::Fixed(k) => k as i64,
        };
        k.max(1) as usize
    }
}

/// Inverse standard normal CDF (Acklam's rational approximation).
fn normal_quantile(p: f32) -> f32 {
    let p = f64::from(p.clamp(1e-6, 1.0 - 1e-6));
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    let low = 0.02425;
    let x = if p < low {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - low {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };
    x as f32
}

/// Letter values of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterValues {
    /// Median.
    pub median: f32,
    /// Box extents `(lower, upper)`, innermost first.
    pub boxes: Vec<(f32, f32)>,
    /// Observations outside the outermost box, ascending.
    pub outliers: Vec<f32>,
    /// Number of finite observations.
    pub n: usize,
}

impl LetterValues {
    /// Compute letter values. `None` when `data` has no finite value.
    #[must_use]
    pub fn from_data(data: &[f32], k_depth: KDepth) -> Option<Self> {
        let sorted = sorted_finite(data);
        if sorted.is_empty() {
            return None;
        }
        let n = sorted.len();
        let k = k_depth.depth(n);

        let mut boxes: Vec<(f32, f32)> = (0..k)
            .map(|i| {
                let tail = 100.0 * 0.5f32.powi(i as i32 + 2);
                (percentile(&sorted, tail), percentile(&sorted, 100.0 - tail))
            })
            .collect();
        if k_depth == KDepth::Full {
            if let Some(outer) = boxes.last_mut() {
                *outer = (sorted[0], sorted[n - 1]);
            }
        }

        let (lo, hi) = boxes.last().copied().unwrap_or((sorted[0], sorted[n - 1]));
        let outliers = sorted.iter().copied().filter(|&x| x < lo || x > hi).collect();

        Some(Self {
            median: percentile(&sorted, 50.0),
            boxes,
            outliers,
            n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_depth_rules() {
        assert_eq!(KDepth::Tukey.depth(1000), 6);
        assert_eq!(KDepth::Tukey.depth(10), 1);
        assert_eq!(KDepth::Full.depth(1024), 11);
        assert_eq!(KDepth::Fixed(4).depth(10), 4);
        assert_eq!(KDepth::Fixed(0).depth(10), 1);
        // 1000 * 0.007 = 7 -> log2 = 2.8 -> 2; 9 - 2 + 1
        assert_eq!(KDepth::Proportion(0.007).depth(1000), 8);
        // 1000 / 7.68 = 130 -> log2 = 7.02 -> 7; + 1
        assert_eq!(KDepth::Trustworthy(0.05).depth(1000), 8);
    }

    #[test]
    fn test_normal_quantile() {
        assert_relative_eq!(normal_quantile(0.975), 1.96, epsilon = 1e-3);
        assert_relative_eq!(normal_quantile(0.5), 0.0, epsilon = 1e-5);
        assert_relative_eq!(normal_quantile(0.005), -2.5758, epsilon = 1e-3);
    }

    #[test]
    fn test_boxes_are_nested() {
        let data: Vec<f32> = (0..1000).map(|i| ((i * 37) % 1000) as f32).collect();
        let lv = LetterValues::from_data(&data, KDepth::Tukey).unwrap();
        assert_eq!(lv.boxes.len(), 6);
        assert_relative_eq!(lv.median, 499.5, epsilon = 1e-3);
        for pair in lv.boxes.windows(2) {
            assert!(pair[1].0 <= pair[0].0);
            assert!(pair[1].1 >= pair[0].1);
        }
        let (lo, hi) = *lv.boxes.last().unwrap();
        assert!(lv.outliers.iter().all(|&x| x < lo || x > hi));
        assert!(!lv.outliers.is_empty());
    }

    #[test]
    fn test_full_depth_has_no_outliers() {
        let data: Vec<f32> = (0..64).map(|i| i as f32).collect();
        let lv = LetterValues::from_data(&data, KDepth::Full).unwrap();
        assert!(lv.outliers.is_empty());
        assert_eq!(*lv.boxes.last().unwrap(), (0.0, 63.0));
    }

    #[test]
    fn test_empty() {
        assert!(LetterValues::from_data(&[], KDepth::Tukey).is_none());
    }
}
