//! Beeswarm placement.
//!
//! Works in pixel space along both axes. Points are placed in ascending
//! value order; each takes the offset of smallest magnitude that keeps it at
//! least one `diameter` away from every point already placed.

/// Squared-distance slack for float rounding in the overlap test.
const OVERLAP_TOLERANCE: f32 = 1e-4;

/// Beeswarm layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beeswarm {
    /// Minimum center-to-center distance in pixels.
    pub diameter: f32,
    /// Largest allowed offset from the category center in pixels.
    pub gutter: f32,
}

/// Result of a beeswarm placement.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmLayout {
    /// Offset along the categorical axis, one per input value, input order.
    pub offsets: Vec<f32>,
    /// Number of points clamped to the gutter.
    pub clamped: usize,
}

impl Beeswarm {
    /// Create a layout with the given spacing and gutter.
    #[must_use]
    pub fn new(diameter: f32, gutter: f32) -> Self {
        Self { diameter: diameter.max(0.0), gutter: gutter.max(0.0) }
    }

    /// Place `values` (pixel coordinates along the value axis).
    #[must_use]
    pub fn place(&self, values: &[f32]) -> SwarmLayout {
        let n = values.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        let d = self.diameter;
        let d2 = d * d;
        let mut offsets = vec![0.0f32; n];
        // (value, offset) of placed points in ascending value order
        let mut placed: Vec<(f32, f32)> = Vec::with_capacity(n);

        for &idx in &order {
            let y = values[idx];
            let neighbors: Vec<(f32, f32)> = placed
                .iter()
                .rev()
                .take_while(|&&(py, _)| y - py < d)
                .map(|&(py, px)| (y - py, px))
                .collect();

            let mut candidates = vec![0.0f32];
            for &(dy, px) in &neighbors {
                let dx = (d2 - dy * dy).max(0.0).sqrt();
                candidates.push(px + dx);
                candidates.push(px - dx);
            }
            candidates.sort_by(|a, b| a.abs().total_cmp(&b.abs()).then(a.total_cmp(b)));

            let fits = |c: f32| {
                neighbors
                    .iter()
                    .all(|&(dy, px)| (c - px) * (c - px) + dy * dy >= d2 * (1.0 - OVERLAP_TOLERANCE))
            };
            let offset = candidates.iter().copied().find(|&c| fits(c)).unwrap_or_else(|| {
                candidates.iter().copied().fold(0.0, f32::max)
            });

            offsets[idx] = offset;
            placed.push((y, offset));
        }

        let mut clamped = 0;
        for offset in &mut offsets {
            if offset.abs() > self.gutter {
                *offset = offset.clamp(-self.gutter, self.gutter);
                clamped += 1;
            }
        }
        if clamped > 0 {
            tracing::warn!(
                clamped,
                total = n,
                "{:.1}% of the points cannot be placed; consider smaller markers or a strip plot",
                100.0 * clamped as f32 / n as f32
            );
        }

        SwarmLayout { offsets, clamped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_isolated_points_stay_centered() {
        let layout = Beeswarm::new(5.0, 50.0).place(&[0.0, 10.0, 20.0]);
        assert_eq!(layout.offsets, vec![0.0, 0.0, 0.0]);
        assert_eq!(layout.clamped, 0);
    }

    #[test]
    fn test_ties_spread_out() {
        let layout = Beeswarm::new(4.0, 100.0).place(&[1.0, 1.0, 1.0]);
        let mut offsets = layout.offsets.clone();
        offsets.sort_by(f32::total_cmp);
        assert_eq!(offsets, vec![-4.0, 0.0, 4.0]);
    }

    #[test]
    fn test_gutter_clamps() {
        let layout = Beeswarm::new(4.0, 5.0).place(&[0.0; 6]);
        assert!(layout.clamped > 0);
        assert!(layout.offsets.iter().all(|o| o.abs() <= 5.0));
    }

    #[test]
    fn test_empty() {
        let layout = Beeswarm::new(4.0, 5.0).place(&[]);
        assert!(layout.offsets.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_min_distance_held(
            values in prop::collection::vec(0.0f32..200.0, 1..80),
            diameter in 1.0f32..12.0,
        ) {
            let layout = Beeswarm::new(diameter, f32::INFINITY).place(&values);
            prop_assert_eq!(layout.clamped, 0);
            for i in 0..values.len() {
                for j in (i + 1)..values.len() {
                    let dx = layout.offsets[i] - layout.offsets[j];
                    let dy = values[i] - values[j];
                    prop_assert!((dx * dx + dy * dy).sqrt() >= diameter * 0.999);
                }
            }
        }
    }
}
