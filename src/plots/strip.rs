//! Strip plot: one jittered marker per observation.

use super::PanelContext;
use crate::render::{DrawCommand, DrawList, Marker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draw in `[-half, half]`, or 0 when `half` is 0.
fn noise(rng: &mut StdRng, half: f32) -> f32 {
    if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}

pub(super) fn render(ctx: &PanelContext<'_>, rng: &mut StdRng) -> DrawList {
    let opts = ctx.options;
    let mut own_rng = opts.jitter_seed.map(StdRng::seed_from_u64);
    let rng = own_rng.as_mut().unwrap_or(rng);
    let value_jitter = opts.value_jitter.max(0.0);

    let mut list = DrawList::new();
    for group in ctx.groups {
        let base = ctx.position(group);
        let fill = ctx.color(group);
        // Dodged groups jitter within their own slot
        let jitter = opts.jitter.max(0.0) * ctx.slot_fraction(group);
        for &value in &group.values {
            let offset = noise(rng, jitter);
            let value = value + noise(rng, value_jitter);
            list.push(DrawCommand::Marker {
                at: ctx.orient.point(base + offset, value),
                shape: Marker::Circle,
                size: ctx.theme.marker_size,
                fill,
                stroke: None,
            });
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orient;
    use crate::plots::test_support::{group, Fixture};

    #[test]
    fn test_one_marker_per_observation_within_jitter() {
        let fx = Fixture::new(vec![group(0, 0, &[1.0, 2.0, 3.0]), group(1, 0, &[4.0, 5.0])], 1, false);
        let mut rng = StdRng::seed_from_u64(0);
        let list = render(&fx.ctx(), &mut rng);
        let markers = list.markers();
        assert_eq!(markers.len(), 5);
        assert!(markers[..3].iter().all(|p| p.x.abs() <= 0.1));
        assert!(markers[3..].iter().all(|p| (p.x - 1.0).abs() <= 0.1 + 1e-6));
        assert_eq!(markers[4].y, 5.0);
    }

    #[test]
    fn test_zero_jitter_and_seed_reproducible() {
        let mut fx = Fixture::new(vec![group(2, 0, &[1.0, 2.0])], 1, false);
        let a = render(&fx.ctx(), &mut StdRng::seed_from_u64(9));
        let b = render(&fx.ctx(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);

        fx.options.jitter = 0.0;
        fx.orient = Orient::Horizontal;
        let list = render(&fx.ctx(), &mut StdRng::seed_from_u64(9));
        assert!(list.markers().iter().all(|p| p.y == 2.0));
    }

    #[test]
    fn test_dodged_hues_narrow_jitter() {
        let fx = Fixture::new(vec![group(0, 0, &[1.0; 20]), group(0, 1, &[1.0; 20])], 2, true);
        let list = render(&fx.ctx(), &mut StdRng::seed_from_u64(4));
        let markers = list.markers();
        assert!(markers[..20].iter().all(|p| (p.x + 0.2).abs() <= 0.05 + 1e-6));
        assert!(markers[20..].iter().all(|p| (p.x - 0.2).abs() <= 0.05 + 1e-6));
    }

    #[test]
    fn test_value_jitter_stays_within_half_width() {
        let mut fx = Fixture::new(vec![group(0, 0, &[5.0; 50])], 1, false);
        fx.options.jitter = 0.0;
        fx.options.value_jitter = 0.5;
        let markers = render(&fx.ctx(), &mut StdRng::seed_from_u64(1)).markers();
        assert!(markers.iter().all(|p| p.x == 0.0));
        assert!(markers.iter().all(|p| (p.y - 5.0).abs() <= 0.5 + 1e-6));
        assert!(markers.iter().any(|p| p.y != 5.0));
    }

    #[test]
    fn test_jitter_seed_overrides_build_rng() {
        let mut fx = Fixture::new(vec![group(0, 0, &[1.0, 2.0, 3.0])], 1, false);
        fx.options.jitter_seed = Some(77);
        let a = render(&fx.ctx(), &mut StdRng::seed_from_u64(1));
        let b = render(&fx.ctx(), &mut StdRng::seed_from_u64(2));
        assert_eq!(a, b);
    }
}
