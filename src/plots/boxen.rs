//! Boxen (letter-value) plot: nested boxes narrowing toward the tails.

use super::PanelContext;
use crate::render::{DrawCommand, DrawList, Marker};
use crate::stats::LetterValues;

/// Fraction of the way to white reached by the outermost box.
const TAIL_LIGHTEN: f32 = 0.85;

pub(super) fn render(ctx: &PanelContext<'_>) -> DrawList {
    let line = ctx.theme.line_color;
    let lw = ctx.theme.line_width;

    let mut list = DrawList::new();
    for group in ctx.groups {
        let Some(lv) = LetterValues::from_data(&group.values, ctx.options.k_depth) else {
            continue;
        };
        let pos = ctx.position(group);
        let width = ctx.element_width(group);
        let fill = ctx.theme.fill(ctx.color(group));
        let k = lv.boxes.len();

        // Outermost first so inner boxes paint over it
        for (i, &(lo, hi)) in lv.boxes.iter().enumerate().rev() {
            let depth = i as f32 / k as f32;
            let half = width * (1.0 - depth) / 2.0;
            list.push(DrawCommand::Rect {
                rect: ctx.orient.rect(pos - half, pos + half, lo, hi),
                fill: fill.lighten(TAIL_LIGHTEN * depth),
                stroke: Some(line),
                stroke_width: lw * 0.5,
            });
        }
        list.push(ctx.cross_line(pos - width / 2.0, pos + width / 2.0, lv.median, line, lw));

        for &outlier in &lv.outliers {
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
