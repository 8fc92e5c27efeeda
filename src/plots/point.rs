//! Point plot: estimate markers with error bars, joined per hue level.

use super::PanelContext;
use crate::render::{DrawCommand, DrawList, Marker};
use crate::stats::aggregate;
use rand::rngs::StdRng;

pub(super) fn render(ctx: &PanelContext<'_>, rng: &mut StdRng) -> DrawList {
    let opts = ctx.options;
    let estimates: Vec<_> = ctx
        .groups
        .iter()
        .filter_map(|g| {
            aggregate(&g.values, opts.estimator, opts.errorbar, opts.n_boot, rng).map(|a| (g, a))
        })
        .collect();

    let lw = ctx.theme.line_width;
    let mut list = DrawList::new();

    if opts.join {
        let n_hue = estimates.iter().map(|(g, _)| g.hue + 1).max().unwrap_or(0);
        for hue in 0..n_hue {
            let mut line: Vec<_> = estimates.iter().filter(|(g, _)| g.hue == hue).collect();
            if line.len() < 2 {
                continue;
            }
            line.sort_by_key(|(g, _)| g.category);
            list.push(DrawCommand::Polyline {
                points: line
                    .iter()
                    .map(|(g, a)| ctx.orient.point(ctx.position(g), a.estimate))
                    .collect(),
                color: ctx.color(line[0].0),
                width: lw * 1.5,
            });
        }
    }

    for (group, agg) in &estimates {
        let pos = ctx.position(group);
        let color = ctx.color(group);
        if let Some(interval) = agg.interval {
            ctx.error_bar(&mut list, group, interval, color);
        }
        list.push(DrawCommand::Marker {
            at: ctx.orient.point(pos, agg.estimate),
            shape: Marker::Circle,
            size: ctx.theme.marker_size * 1.5,
            fill: color,
            stroke: None,
        });
    }
    list
}
