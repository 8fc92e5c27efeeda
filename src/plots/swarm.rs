//! Swarm plot: non-overlapping markers, one per observation.
//!
//! Groups drawn at the same position share one swarm, so undodged hue
//! levels avoid each other as well as themselves.

use super::{Group, PanelContext};
use crate::render::{DrawCommand, DrawList, Marker};
use crate::stats::Beeswarm;

/// Groups that share a category position: `(category, hue slot)`.
fn swarm_key(ctx: &PanelContext<'_>, group: &Group) -> (usize, Option<usize>) {
    (group.category, ctx.dodge.is_dodged().then_some(group.hue))
}

pub(super) fn render(ctx: &PanelContext<'_>) -> DrawList {
    let px_cat = ctx.px_per_category.max(f32::EPSILON);
    let diameter = ctx.theme.marker_size + ctx.options.swarm_spacing.max(0.0);

    // Offsets per group, filled swarm by swarm
    let mut offsets: Vec<Vec<f32>> = vec![Vec::new(); ctx.groups.len()];
    let mut done = vec![false; ctx.groups.len()];
    for (i, first) in ctx.groups.iter().enumerate() {
        if done[i] {
            continue;
        }
        let key = swarm_key(ctx, first);
        let members: Vec<usize> = (i..ctx.groups.len())
            .filter(|&j| swarm_key(ctx, &ctx.groups[j]) == key)
            .collect();

        let pixels: Vec<f32> = members
            .iter()
            .flat_map(|&j| ctx.groups[j].values.iter().map(|v| v * ctx.px_per_value))
            .collect();
        let swarm = Beeswarm::new(diameter, ctx.element_width(first) / 2.0 * px_cat);
        let mut placed = swarm.place(&pixels).offsets.into_iter();
        for &j in &members {
            offsets[j] = placed.by_ref().take(ctx.groups[j].values.len()).collect();
            done[j] = true;
        }
    }

    let mut list = DrawList::new();
    for (group, offsets) in ctx.groups.iter().zip(&offsets) {
        let base = ctx.position(group);
        let fill = ctx.color(group);
        for (&value, offset) in group.values.iter().zip(offsets) {
            list.push(DrawCommand::Marker {
                at: ctx.orient.point(base + offset / px_cat, value),
                shape: Marker::Circle,
                size: ctx.theme.marker_size,
                fill,
                stroke: None,
            });
        }
    }
    list
}
