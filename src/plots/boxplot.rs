//! Box plot: quartile box, median, whiskers with caps, outliers.

use super::PanelContext;
use crate::render::{DrawCommand, DrawList, Marker};
use crate::stats::BoxStats;

pub(super) fn render(ctx: &PanelContext<'_>) -> DrawList {
    let line = ctx.theme.line_color;
    let lw = ctx.theme.line_width;

    let mut list = DrawList::new();
    for group in ctx.groups {
        let Some(stats) = BoxStats::with_whis(&group.values, ctx.options.whis) else {
            continue;
        };
        let pos = ctx.position(group);
        let width = ctx.element_width(group);
        let (left, right) = (pos - width / 2.0, pos + width / 2.0);

        list.push(DrawCommand::Rect {
            rect: ctx.orient.rect(left, right, stats.q1, stats.q3),
            fill: ctx.theme.fill(ctx.color(group)),
            stroke: Some(line),
            stroke_width: lw,
        });
        list.push(ctx.cross_line(left, right, stats.median, line, lw));

        // Whiskers from the box edges to the extreme inliers
        list.push(ctx.value_line(pos, stats.q1, stats.min, line, lw));
        list.push(ctx.value_line(pos, stats.q3, stats.max, line, lw));
        let cap = width / 4.0;
        list.push(ctx.cross_line(pos - cap, pos + cap, stats.min, line, lw));
        list.push(ctx.cross_line(pos - cap, pos + cap, stats.max, line, lw));

        for &outlier in &stats.outliers {
            list.push(DrawCommand::Marker {
                at: ctx.orient.point(pos, outlier),
                shape: Marker::Diamond,
                size: ctx.theme.marker_size,
                fill: line,
                stroke: None,
            });
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Orient, Rect};
    use crate::plots::test_support::{group, Fixture};
    use approx::assert_relative_eq;

    #[test]
    fn test_one_box_per_group() {
        let fx = Fixture::new(
            vec![
                group(0, 0, &[1.0, 2.0, 3.0, 4.0, 5.0]),
                group(1, 0, &[2.0, 4.0, 6.0, 8.0]),
                group(2, 0, &[]),
            ],
            1,
            true,
        );
        let list = render(&fx.ctx());
        let rects = list.rects();
        assert_eq!(rects.len(), 2);
        assert_relative_eq!(rects[0].x, -0.4);
        assert_relative_eq!(rects[0].width, 0.8);
        assert_relative_eq!(rects[0].y, 2.0);
        assert_relative_eq!(rects[0].height, 2.0);
        assert_relative_eq!(rects[1].center().x, 1.0);
    }

    #[test]
    fn test_outliers_drawn_as_markers() {
        let fx = Fixture::new(vec![group(0, 0, &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0])], 1, true);
        let list = render(&fx.ctx());
        let markers = list.markers();
        assert_eq!(markers.len(), 1);
        assert_relative_eq!(markers[0].y, 100.0);
        // Whisker ends at the largest inlier, not at the fence
        assert!(list.bounds().is_some_and(|b| b.y + b.height == 100.0));
        assert!(list.iter().any(|c| matches!(c,
            DrawCommand::Line { to, .. } if to.y == 5.0 && to.x == 0.0)));
    }

    #[test]
    fn test_horizontal_box() {
        let mut fx = Fixture::new(vec![group(1, 0, &[1.0, 2.0, 3.0, 4.0, 5.0])], 1, true);
        fx.orient = Orient::Horizontal;
        let list = render(&fx.ctx());
        let rect = **list.rects().first().unwrap();
        assert_eq!(rect, Rect::from_corners(
            crate::geometry::Point::new(2.0, 0.6),
            crate::geometry::Point::new(4.0, 1.4),
        ));
    }

    #[test]
    fn test_dodged_boxes_are_side_by_side() {
        let fx = Fixture::new(
            vec![group(0, 0, &[1.0, 2.0, 3.0]), group(0, 1, &[1.0, 2.0, 3.0])],
            2,
            true,
        );
        let list = render(&fx.ctx());
        let rects = list.rects();
        assert_relative_eq!(rects[0].center().x, -0.2);
        assert_relative_eq!(rects[1].center().x, 0.2);
        assert!(rects[0].x + rects[0].width <= rects[1].x + 1e-6);
    }
}
