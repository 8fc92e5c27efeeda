//! Violin plot: mirrored kernel density outline plus inner marks.

use super::{PanelContext, ViolinInner, ViolinScale};
use crate::color::Rgba;
use crate::geometry::Point;
use crate::render::{DrawCommand, DrawList, Marker};
use crate::stats::{BoxStats, Kde};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Both,
    Left,
    Right,
}

impl Side {
    fn extent(self, pos: f32, half_width: f32) -> (f32, f32) {
        match self {
            Side::Both => (pos - half_width, pos + half_width),
            Side::Left => (pos - half_width, pos),
            Side::Right => (pos, pos + half_width),
        }
    }
}

/// Density at `value` by linear interpolation; 0 outside the support.
fn density_at(kde: &Kde, value: f32) -> f32 {
    let s = &kde.support;
    let (Some(&first), Some(&last)) = (s.first(), s.last()) else {
        return 0.0;
    };
    if value < first || value > last {
        return 0.0;
    }
    let i = s.partition_point(|&x| x < value);
    if i == 0 {
        return kde.density[0];
    }
    let (x0, x1) = (s[i - 1], s[i]);
    let t = if x1 > x0 { (value - x0) / (x1 - x0) } else { 0.0 };
    kde.density[i - 1] * (1.0 - t) + kde.density[i] * t
}

pub(super) fn render(ctx: &PanelContext<'_>) -> DrawList {
    let opts = ctx.options;
    let fits: Vec<_> = ctx
        .groups
        .iter()
        .filter_map(|g| Kde::fit(&g.values, opts.bw, opts.cut, opts.gridsize).map(|k| (g, k)))
        .collect();

    let peak = fits
        .iter()
        .filter(|(_, k)| !k.is_degenerate())
        .map(|(_, k)| k.max_density())
        .fold(0.0f32, f32::max);
    let max_n = fits.iter().map(|(_, k)| k.n).max().unwrap_or(1).max(1);
    let line = ctx.theme.line_color;
    let lw = ctx.theme.line_width;

    let mut list = DrawList::new();
    for (group, kde) in &fits {
        let (pos, side) = if opts.split {
            let side = if group.hue % 2 == 0 { Side::Left } else { Side::Right };
            (group.category as f32, side)
        } else {
            (ctx.position(group), Side::Both)
        };
        let fill = ctx.theme.fill(ctx.color(group));
        let half = ctx.element_width(group) / 2.0;

        if kde.is_degenerate() {
            let (p0, p1) = side.extent(pos, half);
            list.push(ctx.cross_line(p0, p1, kde.support[0], fill, lw * 2.0));
            continue;
        }

        let scale = match opts.violin_scale {
            ViolinScale::Area if peak > 0.0 => half / peak,
            ViolinScale::Count if peak > 0.0 => half / peak * kde.n as f32 / max_n as f32,
            _ => half / kde.max_density().max(f32::EPSILON),
        };

        let outline = |sign: f32| {
            kde.support
                .iter()
                .zip(&kde.density)
                .map(move |(&v, &d)| ctx.orient.point(pos + sign * d * scale, v))
        };
        let lo = kde.support[0];
        let hi = kde.support[kde.support.len() - 1];
        let points: Vec<Point> = match side {
            Side::Both => outline(-1.0).chain(outline(1.0).collect::<Vec<_>>().into_iter().rev()).collect(),
            Side::Left => outline(-1.0)
                .chain([ctx.orient.point(pos, hi), ctx.orient.point(pos, lo)])
                .collect(),
            Side::Right => outline(1.0)
                .chain([ctx.orient.point(pos, hi), ctx.orient.point(pos, lo)])
                .collect(),
        };
        list.push(DrawCommand::Polygon {
            points,
            fill,
            stroke: Some(line),
            stroke_width: lw,
        });

        inner_marks(ctx, &mut list, &group.values, kde, pos, side, scale, line);
    }
    list
}

#[allow(clippy::too_many_arguments)]
fn inner_marks(
    ctx: &PanelContext<'_>,
    list: &mut DrawList,
    values: &[f32],
    kde: &Kde,
    pos: f32,
    side: Side,
    scale: f32,
    line: Rgba,
) {
    let lw = ctx.theme.line_width;
    let across = |v: f32, width: f32| {
        let (p0, p1) = side.extent(pos, density_at(kde, v) * scale);
        ctx.cross_line(p0, p1, v, line, width)
    };

    match ctx.options.inner {
        ViolinInner::Box => {
            let Some(stats) = BoxStats::from_data(values) else {
                return;
            };
            list.push(ctx.value_line(pos, stats.min, stats.max, line, lw));
            list.push(ctx.value_line(pos, stats.q1, stats.q3, line, lw * 3.0));
            list.push(DrawCommand::Marker {
                at: ctx.orient.point(pos, stats.median),
                shape: Marker::Circle,
                size: lw * 3.0,
                fill: Rgba::WHITE,
                stroke: None,
            });
        }
        ViolinInner::Quartiles => {
            if let Some(stats) = BoxStats::from_data(values) {
                for q in [stats.q1, stats.median, stats.q3] {
                    list.push(across(q, lw));
                }
            }
        }
        ViolinInner::Sticks => {
            for &v in values {
                list.push(across(v, lw * 0.5));
            }
        }
        ViolinInner::Points => {
            for &v in values {
                list.push(DrawCommand::Marker {
                    at: ctx.orient.point(pos, v),
                    shape: Marker::Circle,
                    size: ctx.theme.marker_size / 2.0,
                    fill: line,
                    stroke: None,
                });
            }
        }
        ViolinInner::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::test_support::{group, Fixture};

    fn polygons(list: &DrawList) -> Vec<&Vec<Point>> {
        list.iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }

    const A: [f32; 8] = [1.0, 2.0, 2.5, 3.0, 3.0, 3.5, 4.0, 6.0];
    const B: [f32; 5] = [2.0, 4.0, 5.0, 5.5, 7.0];

    #[test]
    fn test_violins_stay_inside_width() {
        let fx = Fixture::new(vec![group(0, 0, &A), group(1, 0, &B)], 1, true);
        let list = render(&fx.ctx());
        let polys = polygons(&list);
        assert_eq!(polys.len(), 2);
        for (i, poly) in polys.iter().enumerate() {
            assert!(poly.iter().all(|p| (p.x - i as f32).abs() <= 0.4 + 1e-5));
        }
        // Area scaling: only the densest violin reaches the full width
        let reach = |poly: &Vec<Point>, c: f32| {
            poly.iter().map(|p| (p.x - c).abs()).fold(0.0f32, f32::max)
        };
        let widest = reach(polys[0], 0.0).max(reach(polys[1], 1.0));
        assert!((widest - 0.4).abs() < 1e-4);
    }

    #[test]
    fn test_width_scale_fills_every_violin() {
        let mut fx = Fixture::new(vec![group(0, 0, &A), group(1, 0, &B)], 1, true);
        fx.options.violin_scale = ViolinScale::Width;
        let list = render(&fx.ctx());
        for (i, poly) in polygons(&list).iter().enumerate() {
            let reach = poly.iter().map(|p| (p.x - i as f32).abs()).fold(0.0f32, f32::max);
            assert!((reach - 0.4).abs() < 1e-4);
        }
    }

    #[test]
    fn test_support_extends_cut_bandwidths() {
        let fx = Fixture::new(vec![group(0, 0, &A)], 1, true);
        let list = render(&fx.ctx());
        let kde = Kde::fit(&A, fx.options.bw, 2.0, fx.options.gridsize).unwrap();
        let poly = polygons(&list)[0];
        let lowest = poly.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert!((lowest - (1.0 - 2.0 * kde.bandwidth)).abs() < 1e-4);
    }

    #[test]
    fn test_split_draws_halves_on_each_side() {
        let mut fx = Fixture::new(vec![group(0, 0, &A), group(0, 1, &B)], 2, false);
        fx.options.split = true;
        fx.options.inner = ViolinInner::None;
        let list = render(&fx.ctx());
        let polys = polygons(&list);
        assert_eq!(polys.len(), 2);
        assert!(polys[0].iter().all(|p| p.x <= 1e-6));
        assert!(polys[1].iter().all(|p| p.x >= -1e-6));
    }

    #[test]
    fn test_inner_variants() {
        let mut fx = Fixture::new(vec![group(0, 0, &A)], 1, true);
        let count_lines = |fx: &Fixture| {
            render(&fx.ctx())
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line { .. }))
                .count()
        };
        assert_eq!(count_lines(&fx), 2);
        fx.options.inner = ViolinInner::Quartiles;
        assert_eq!(count_lines(&fx), 3);
        fx.options.inner = ViolinInner::Sticks;
        assert_eq!(count_lines(&fx), A.len());
        fx.options.inner = ViolinInner::Points;
        assert_eq!(render(&fx.ctx()).markers().len(), A.len());
        fx.options.inner = ViolinInner::None;
        assert_eq!(render(&fx.ctx()).len(), 1);
    }

    #[test]
    fn test_single_value_is_flat_line() {
        let fx = Fixture::new(vec![group(0, 0, &[4.0, 4.0])], 1, true);
        let list = render(&fx.ctx());
        assert_eq!(list.len(), 1);
        assert!(matches!(list.commands()[0],
            DrawCommand::Line { from, to, .. } if from.y == 4.0 && to.y == 4.0));
    }

    #[test]
    fn test_density_interpolation() {
        let kde = Kde::fit(&A, crate::stats::Bandwidth::Scott, 2.0, 50).unwrap();
        assert_eq!(density_at(&kde, -100.0), 0.0);
        let mid = density_at(&kde, 3.0);
        assert!(mid > 0.0 && mid <= kde.max_density() + 1e-6);
    }
}
