//! Bar and count plots: bars from the zero baseline.

use super::{Group, PanelContext};
use crate::color::Rgba;
use crate::render::{DrawCommand, DrawList};
use crate::stats::aggregate;
use rand::rngs::StdRng;

fn push_bar(ctx: &PanelContext<'_>, list: &mut DrawList, group: &Group, height: f32, fill: Rgba) {
    let pos = ctx.position(group);
    let half = ctx.element_width(group) / 2.0;
    list.push(DrawCommand::Rect {
        rect: ctx.orient.rect(pos - half, pos + half, 0.0, height),
        fill,
        stroke: None,
        stroke_width: 0.0,
    });
}

/// Bar at the estimate of each group with its error bar.
pub(super) fn render(ctx: &PanelContext<'_>, rng: &mut StdRng) -> DrawList {
    let opts = ctx.options;
    let mut list = DrawList::new();
    for group in ctx.groups {
        let Some(agg) = aggregate(&group.values, opts.estimator, opts.errorbar, opts.n_boot, rng) else {
            continue;
        };
        push_bar(ctx, &mut list, group, agg.estimate, ctx.theme.fill(ctx.color(group)));
        if let Some(interval) = agg.interval {
            ctx.error_bar(&mut list, group, interval, ctx.theme.line_color);
        }
    }
    list
}

/// Bar of the row count of each group.
pub(super) fn render_count(ctx: &PanelContext<'_>) -> DrawList {
    let mut list = DrawList::new();
    for group in ctx.groups.iter().filter(|g| g.count > 0) {
        let fill = ctx.theme.fill(ctx.color(group));
        push_bar(ctx, &mut list, group, group.count as f32, fill);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orient;
    use crate::plots::test_support::{group, Fixture};
    use crate::stats::{ErrorBar, Estimator};
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    #[test]
    fn test_bar_height_is_estimate() {
        let mut fx = Fixture::new(vec![group(0, 0, &[1.0, 2.0, 3.0]), group(1, 0, &[10.0, 20.0])], 1, true);
        fx.options.errorbar = ErrorBar::None;
        let list = render(&fx.ctx(), &mut StdRng::seed_from_u64(0));
        let rects = list.rects();
        assert_eq!(rects.len(), 2);
        assert_relative_eq!(rects[0].y, 0.0);
        assert_relative_eq!(rects[0].height, 2.0);
        assert_relative_eq!(rects[1].height, 15.0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_negative_estimate_hangs_below_baseline() {
        let mut fx = Fixture::new(vec![group(0, 0, &[-4.0, -2.0])], 1, true);
        fx.options.errorbar = ErrorBar::None;
        fx.options.estimator = Estimator::Sum;
        let list = render(&fx.ctx(), &mut StdRng::seed_from_u64(0));
        let rect = list.rects()[0];
        assert_relative_eq!(rect.y, -6.0);
        assert_relative_eq!(rect.height, 6.0);
    }

    #[test]
    fn test_error_bar_with_caps_is_seeded() {
        let values: Vec<f32> = (0..40).map(|i| (i % 9) as f32).collect();
        let fx = Fixture::new(vec![group(0, 0, &values)], 1, true);
        let a = render(&fx.ctx(), &mut StdRng::seed_from_u64(11));
        let b = render(&fx.ctx(), &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
        // bar, error line, two caps
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_count_bars() {
        let mut fx = Fixture::new(
            vec![
                crate::plots::Group { category: 0, hue: 0, values: vec![], count: 3 },
                crate::plots::Group { category: 1, hue: 0, values: vec![], count: 0 },
                crate::plots::Group { category: 2, hue: 0, values: vec![], count: 5 },
            ],
            1,
            true,
        );
        fx.orient = Orient::Horizontal;
        let list = render_count(&fx.ctx());
        let rects = list.rects();
        assert_eq!(rects.len(), 2);
        assert_relative_eq!(rects[0].width, 3.0);
        assert_relative_eq!(rects[1].width, 5.0);
        assert_relative_eq!(rects[1].center().y, 2.0);
    }
}
