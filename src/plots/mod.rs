//! Per-kind panel renderers.
//!
//! Each renderer turns the observation groups of one panel into a
//! [`DrawList`]. Positions are in data space: category `i` sits at `i`, hue
//! sub-groups are shifted by the dodge layout, values keep their data units.
//! [`render`] picks the renderer for a [`PlotKind`].

mod bar;
mod boxen;
mod boxplot;
mod point;
mod strip;
mod swarm;
mod violin;

use crate::categorical::{DodgeEmpty, DodgeLayout, PlotKind};
use crate::color::Rgba;
use crate::geometry::Orient;
use crate::render::{DrawCommand, DrawList};
use crate::stats::{Bandwidth, ErrorBar, Estimator, KDepth};
use crate::theme::Theme;
use rand::rngs::StdRng;

/// Marks drawn inside a violin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ViolinInner {
    /// Miniature box plot.
    #[default]
    Box,
    /// Lines at the three quartiles.
    Quartiles,
    /// One line per observation.
    Sticks,
    /// One small marker per observation.
    Points,
    /// Nothing.
    None,
}

/// How violin widths are normalized within a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ViolinScale {
    /// Same peak-density scale for every violin.
    #[default]
    Area,
    /// Like `Area`, further scaled by the group's observation count.
    Count,
    /// Every violin reaches the full width.
    Width,
}

/// Per-kind rendering options.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PlotOptions {
    /// Strip jitter half-width in category units; 0 disables jitter.
    pub jitter: f32,
    /// Strip jitter half-width along the value axis in data units.
    pub value_jitter: f32,
    /// Seed for strip jitter only; the build seed is used when unset.
    pub jitter_seed: Option<u64>,
    /// Extra pixels between swarm markers on top of the marker diameter.
    pub swarm_spacing: f32,
    /// Statistic for bar and point plots.
    pub estimator: Estimator,
    /// Error bar for bar and point plots.
    pub errorbar: ErrorBar,
    /// Bootstrap resamples for confidence intervals.
    pub n_boot: usize,
    /// Box whisker reach in IQRs.
    pub whis: f32,
    /// Draw two hue levels as the halves of one violin.
    pub split: bool,
    /// Inner violin marks.
    pub inner: ViolinInner,
    /// Violin width normalization.
    pub violin_scale: ViolinScale,
    /// KDE bandwidth rule.
    pub bw: Bandwidth,
    /// KDE support extension in bandwidths.
    pub cut: f32,
    /// KDE evaluation points.
    pub gridsize: usize,
    /// Letter-value depth rule.
    pub k_depth: KDepth,
    /// Fraction of the category band used by all elements of one category.
    pub width: f32,
    /// Fraction of each dodged slot left empty.
    pub gap: f32,
    /// Slot sizing when a hue level is absent from a category.
    pub dodge_empty: DodgeEmpty,
    /// Connect point estimates of one hue level.
    pub join: bool,
    /// Error bar cap width as a fraction of the element width; 0 disables caps.
    pub capsize: f32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            jitter: 0.1,
            value_jitter: 0.0,
            jitter_seed: None,
            swarm_spacing: 0.0,
            estimator: Estimator::Mean,
            errorbar: ErrorBar::default(),
            n_boot: 1000,
            whis: 1.5,
            split: false,
            inner: ViolinInner::Box,
            violin_scale: ViolinScale::Area,
            bw: Bandwidth::Scott,
            cut: 2.0,
            gridsize: 100,
            k_depth: KDepth::Tukey,
            width: 0.8,
            gap: 0.0,
            dodge_empty: DodgeEmpty::Keep,
            join: true,
            capsize: 0.1,
        }
    }
}

/// Observations at one (category, hue) slot of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Category position.
    pub category: usize,
    /// Hue level index (0 without hue).
    pub hue: usize,
    /// Finite values of the value variable.
    pub values: Vec<f32>,
    /// Number of rows in the slot.
    pub count: usize,
}

/// Everything a renderer needs for one panel.
#[derive(Debug, Clone)]
pub struct PanelContext<'a> {
    /// Non-empty groups, category-major then hue order.
    pub groups: &'a [Group],
    /// Number of categories on the axis.
    pub n_categories: usize,
    /// One color per hue level, or a single color without hue.
    pub colors: &'a [Rgba],
    /// Hue offsets and element width.
    pub dodge: &'a DodgeLayout,
    /// Plot orientation.
    pub orient: Orient,
    /// Theme.
    pub theme: &'a Theme,
    /// Per-kind options.
    pub options: &'a PlotOptions,
    /// Pixels per category unit.
    pub px_per_category: f32,
    /// Pixels per value unit.
    pub px_per_value: f32,
}

impl PanelContext<'_> {
    /// Center of a group on the category axis.
    #[must_use]
    pub fn position(&self, group: &Group) -> f32 {
        self.dodge.position(group.category, group.hue)
    }

    /// Base color of a group.
    #[must_use]
    pub fn color(&self, group: &Group) -> Rgba {
        match self.colors {
            [] => Rgba::GRAY,
            [single] => *single,
            colors => colors.get(group.hue).copied().unwrap_or(Rgba::GRAY),
        }
    }

    /// Width of a group's element in category units.
    #[must_use]
    pub fn element_width(&self, group: &Group) -> f32 {
        self.dodge.element_width_at(group.category, group.hue)
    }

    /// Share of the category band's group width that belongs to `group`.
    #[must_use]
    pub fn slot_fraction(&self, group: &Group) -> f32 {
        self.dodge.slot_fraction(group.category, group.hue)
    }

    /// Vertical or horizontal line at category position `pos` from `v0` to `v1`.
    #[must_use]
    pub fn value_line(&self, pos: f32, v0: f32, v1: f32, color: Rgba, width: f32) -> DrawCommand {
        DrawCommand::Line {
            from: self.orient.point(pos, v0),
            to: self.orient.point(pos, v1),
            color,
            width,
        }
    }

    /// Line across the category axis from `p0` to `p1` at value `v`.
    #[must_use]
    pub fn cross_line(&self, p0: f32, p1: f32, v: f32, color: Rgba, width: f32) -> DrawCommand {
        DrawCommand::Line {
            from: self.orient.point(p0, v),
            to: self.orient.point(p1, v),
            color,
            width,
        }
    }

    /// Error bar from `lo` to `hi` at the group's position, with caps when `capsize` is set.
    pub fn error_bar(&self, list: &mut DrawList, group: &Group, (lo, hi): (f32, f32), color: Rgba) {
        let width = self.theme.line_width;
        let pos = self.position(group);
        list.push(self.value_line(pos, lo, hi, color, width));
        let half_cap = self.options.capsize * self.element_width(group) / 2.0;
        if half_cap > 0.0 {
            list.push(self.cross_line(pos - half_cap, pos + half_cap, lo, color, width));
            list.push(self.cross_line(pos - half_cap, pos + half_cap, hi, color, width));
        }
    }
}

/// Render one panel with the renderer for `kind`.
pub fn render(kind: PlotKind, ctx: &PanelContext<'_>, rng: &mut StdRng) -> DrawList {
    match kind {
        PlotKind::Strip => strip::render(ctx, rng),
        PlotKind::Swarm => swarm::render(ctx),
        PlotKind::Box => boxplot::render(ctx),
        PlotKind::Violin => violin::render(ctx),
        PlotKind::Boxen => boxen::render(ctx),
        PlotKind::Point => point::render(ctx, rng),
        PlotKind::Bar => bar::render(ctx, rng),
        PlotKind::Count => bar::render_count(ctx),
    }
}
