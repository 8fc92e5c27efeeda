//! Quartile statistics for box plots.

/// Statistics computed for a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    /// Lower whisker: smallest observation inside the lower fence.
    pub min: f32,
    /// First quartile (25th percentile)
    pub q1: f32,
    /// Median (50th percentile)
    pub median: f32,
    /// Third quartile (75th percentile)
    pub q3: f32,
    /// Upper whisker: largest observation inside the upper fence.
    pub max: f32,
    /// Interquartile range (Q3 - Q1)
    pub iqr: f32,
    /// Observations outside the fences, ascending.
    pub outliers: Vec<f32>,
    /// Number of finite observations.
    pub n: usize,
}

impl BoxStats {
    /// Compute box plot statistics using the 1.5 * IQR rule.
    #[must_use]
    pub fn from_data(data: &[f32]) -> Option<Self> {
        Self::with_whis(data, 1.5)
    }

    /// Compute box plot statistics with fences at `whis` * IQR beyond the box.
    ///
    /// Returns `None` when `data` holds no finite values.
    #[must_use]
    pub fn with_whis(data: &[f32], whis: f32) -> Option<Self> {
        let sorted = sorted_finite(data);
        if sorted.is_empty() {
            return None;
        }

        let n = sorted.len();
        let q1 = percentile(&sorted, 25.0);
        let median = percentile(&sorted, 50.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;

        let lower_fence = q1 - whis * iqr;
        let upper_fence = q3 + whis * iqr;

        // Whiskers land on real observations, never on the fences themselves
        let min = sorted
            .iter()
            .copied()
            .find(|&x| x >= lower_fence)
            .unwrap_or(sorted[0]);
        let max = sorted
            .iter()
            .rev()
            .copied()
            .find(|&x| x <= upper_fence)
            .unwrap_or(sorted[n - 1]);

        let outliers: Vec<f32> = sorted
            .iter()
            .copied()
            .filter(|&x| x < lower_fence || x > upper_fence)
            .collect();

        Some(Self {
            min,
            q1,
            median,
            q3,
            max,
            iqr,
            outliers,
            n,
        })
    }
}

/// Finite values of `data`, ascending.
#[must_use]
pub fn sorted_finite(data: &[f32]) -> Vec<f32> {
    let mut sorted: Vec<f32> = data.iter().copied().filter(|x| x.is_finite()).collect();
    sorted.sort_by(f32::total_cmp);
    sorted
}

/// Percentile (0-100) of sorted data using linear interpolation.
#[must_use]
pub fn percentile(sorted: &[f32], p: f32) -> f32 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let k = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f32;
    let f = k.floor() as usize;
    let c = k.ceil() as usize;

    if f == c || c >= sorted.len() {
        sorted[f.min(sorted.len() - 1)]
    } else {
        let d = k - f as f32;
        sorted[f] * (1.0 - d) + sorted[c] * d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_box_stats_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let stats = BoxStats::from_data(&data).unwrap();

        assert!((stats.median - 5.0).abs() < 0.01);
        assert!((stats.q1 - 3.0).abs() < 0.01);
        assert!((stats.q3 - 7.0).abs() < 0.01);
        assert!(stats.outliers.is_empty());
        assert_eq!(stats.n, 9);
    }

    #[test]
    fn test_box_stats_with_outliers() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let stats = BoxStats::from_data(&data).unwrap();

        assert_eq!(stats.outliers, vec![100.0]);
        assert!((stats.max - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_whis_widens_fences() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 12.0];
        assert!(!BoxStats::with_whis(&data, 1.5).unwrap().outliers.is_empty());
        assert!(BoxStats::with_whis(&data, 10.0).unwrap().outliers.is_empty());
    }

    #[test]
    fn test_box_stats_empty() {
        assert!(BoxStats::from_data(&[]).is_none());
        assert!(BoxStats::from_data(&[f32::NAN, f32::NAN]).is_none());
    }

    #[test]
    fn test_box_stats_single() {
        let stats = BoxStats::from_data(&[42.0]).unwrap();
        assert!((stats.median - 42.0).abs() < 0.01);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
    }

    #[test]
    fn test_box_stats_nan_filtered() {
        let stats = BoxStats::from_data(&[1.0, f32::NAN, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.n, 4);
        assert!((stats.median - 3.5).abs() < 0.01);
    }

    #[test]
    fn test_percentile() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((percentile(&sorted, 0.0) - 1.0).abs() < 0.01);
        assert!((percentile(&sorted, 50.0) - 3.0).abs() < 0.01);
        assert!((percentile(&sorted, 100.0) - 5.0).abs() < 0.01);
        assert!((percentile(&sorted, 12.5) - 1.5).abs() < 0.01);
        assert!((percentile(&[], 50.0) - 0.0).abs() < 0.01);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn prop_whiskers_are_data_and_outliers_outside_fences(
            data in prop::collection::vec(-1000.0f32..1000.0, 1..200)
        ) {
            let stats = BoxStats::from_data(&data).unwrap();
            prop_assert!(data.contains(&stats.min));
            prop_assert!(data.contains(&stats.max));

            let lo = stats.q1 - 1.5 * stats.iqr;
            let hi = stats.q3 + 1.5 * stats.iqr;
            let mut expected: Vec<f32> =
                data.iter().copied().filter(|&x| x < lo || x > hi).collect();
            expected.sort_by(f32::total_cmp);
            prop_assert_eq!(&stats.outliers, &expected);
            prop_assert_eq!(stats.outliers.len() + data.iter().filter(|&&x| x >= lo && x <= hi).count(), data.len());
        }
    }
}
