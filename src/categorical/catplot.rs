//! Categorical plot request: validation, faceting and dispatch.
//!
//! [`CatPlot`] collects a dataset and every plot option through a builder.
//! [`CatPlot::build`] validates the whole request first, then partitions the
//! rows into facet panels and (category, hue) groups and hands each panel to
//! the renderer of the requested [`PlotKind`]. The result is a [`Figure`].

use crate::categorical::dodge::{DodgeEmpty, DodgeLayout};
use crate::categorical::facet::{Facet, FacetGrid};
use crate::categorical::hue::HueGrouping;
use crate::categorical::kind::PlotKind;
use crate::categorical::order::{resolve_order, CategoryAxis};
use crate::color::Rgba;
use crate::data::{DataFrame, DataValue};
use crate::error::{Error, Result};
use crate::geometry::Orient;
use crate::plots::{self, Group, PanelContext, PlotOptions, ViolinInner, ViolinScale};
use crate::render::DrawList;
use crate::stats::{Bandwidth, ErrorBar, Estimator, KDepth};
use crate::theme::Theme;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::borrow::Cow;

/// Category column of melted wide-form data.
const WIDE_VARIABLE: &str = "variable";
/// Value column of melted wide-form data.
const WIDE_VALUE: &str = "value";
/// Fraction of the value span added on both ends of the value range.
const VALUE_PADDING: f32 = 0.05;
/// Pixel width reserved for the legend.
const LEGEND_WIDTH: u32 = 120;

#[derive(Debug, Clone, PartialEq)]
enum KindRequest {
    Kind(PlotKind),
    Name(String),
}

/// Which column plays which role, after orientation is settled.
#[derive(Debug, Clone)]
struct Roles {
    category: String,
    value: Option<String>,
    orient: Orient,
}

/// Builder for a faceted categorical figure.
///
/// # Example
///
/// ```rust
/// use trueno_catplot::prelude::*;
///
/// let tips = DataFrame::new()
///     .with_str("day", &["Thu", "Fri", "Thu", "Sat"])
///     .with_f32("total_bill", &[10.5, 20.1, 14.0, 31.2]);
///
/// let figure = CatPlot::new(tips)
///     .x("day")
///     .y("total_bill")
///     .kind(PlotKind::Box)
///     .build()
///     .unwrap();
///
/// assert_eq!(figure.category_axis().labels(), ["Thu", "Fri", "Sat"]);
/// ```
#[derive(Debug, Clone)]
pub struct CatPlot {
    data: DataFrame,
    x: Option<String>,
    y: Option<String>,
    hue: Option<String>,
    kind: KindRequest,
    order: Option<Vec<String>>,
    hue_order: Option<Vec<String>>,
    dodge: Option<bool>,
    orient: Option<Orient>,
    row: Option<String>,
    col: Option<String>,
    row_order: Option<Vec<String>>,
    col_order: Option<Vec<String>>,
    col_wrap: Option<usize>,
    height: f32,
    aspect: f32,
    seed: Option<u64>,
    legend: bool,
    options: PlotOptions,
    theme: Theme,
}

fn labels(order: &[&str]) -> Option<Vec<String>> {
    Some(order.iter().map(|s| (*s).to_string()).collect())
}

impl CatPlot {
    /// Start a request over `data`. Defaults: strip plot, 5 inch square panels.
    #[must_use]
    pub fn new(data: DataFrame) -> Self {
        Self {
            data,
            x: None,
            y: None,
            hue: None,
            kind: KindRequest::Kind(PlotKind::Strip),
            order: None,
            hue_order: None,
            dodge: None,
            orient: None,
            row: None,
            col: None,
            row_order: None,
            col_order: None,
            col_wrap: None,
            height: 5.0,
            aspect: 1.0,
            seed: None,
            legend: true,
            options: PlotOptions::default(),
            theme: Theme::default(),
        }
    }

    // ------------------------------------------------------------------
    // Variables
    // ------------------------------------------------------------------

    /// Variable on the x axis.
    #[must_use]
    pub fn x(mut self, var: &str) -> Self {
        self.x = Some(var.to_string());
        self
    }

    /// Variable on the y axis.
    #[must_use]
    pub fn y(mut self, var: &str) -> Self {
        self.y = Some(var.to_string());
        self
    }

    /// Secondary grouping variable, drawn in different colors.
    #[must_use]
    pub fn hue(mut self, var: &str) -> Self {
        self.hue = Some(var.to_string());
        self
    }

    /// Facet variable for grid rows.
    #[must_use]
    pub fn row(mut self, var: &str) -> Self {
        self.row = Some(var.to_string());
        self
    }

    /// Facet variable for grid columns.
    #[must_use]
    pub fn col(mut self, var: &str) -> Self {
        self.col = Some(var.to_string());
        self
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Plot kind.
    #[must_use]
    pub fn kind(mut self, kind: PlotKind) -> Self {
        self.kind = KindRequest::Kind(kind);
        self
    }

    /// Plot kind by name; an unknown name fails in [`CatPlot::build`].
    #[must_use]
    pub fn kind_name(mut self, name: &str) -> Self {
        self.kind = KindRequest::Name(name.to_string());
        self
    }

    /// Explicit category order.
    #[must_use]
    pub fn order(mut self, order: &[&str]) -> Self {
        self.order = labels(order);
        self
    }

    /// Explicit hue level order.
    #[must_use]
    pub fn hue_order(mut self, order: &[&str]) -> Self {
        self.hue_order = labels(order);
        self
    }

    /// Explicit order of the row facet levels.
    #[must_use]
    pub fn row_order(mut self, order: &[&str]) -> Self {
        self.row_order = labels(order);
        self
    }

    /// Explicit order of the column facet levels.
    #[must_use]
    pub fn col_order(mut self, order: &[&str]) -> Self {
        self.col_order = labels(order);
        self
    }

    /// Wrap column facets after this many panels.
    #[must_use]
    pub fn col_wrap(mut self, ncol: usize) -> Self {
        self.col_wrap = Some(ncol);
        self
    }

    /// Place hue groups side by side (`true`) or on top of each other.
    #[must_use]
    pub fn dodge(mut self, dodge: bool) -> Self {
        self.dodge = Some(dodge);
        self
    }

    /// Orientation; inferred from the variable types when not set.
    #[must_use]
    pub fn orient(mut self, orient: Orient) -> Self {
        self.orient = Some(orient);
        self
    }

    /// Panel height in inches.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Panel width as a multiple of its height.
    #[must_use]
    pub fn aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Seed for jitter and bootstrap resampling.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Include hue legend entries in the figure.
    #[must_use]
    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace all per-kind options at once.
    #[must_use]
    pub fn options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    // ------------------------------------------------------------------
    // Per-kind options
    // ------------------------------------------------------------------

    /// Strip jitter half-width in category units; 0 disables jitter.
    #[must_use]
    pub fn jitter(mut self, jitter: f32) -> Self {
        self.options.jitter = jitter;
        self
    }

    /// Strip jitter half-width along the value axis, in data units.
    #[must_use]
    pub fn value_jitter(mut self, jitter: f32) -> Self {
        self.options.value_jitter = jitter;
        self
    }

    /// Seed strip jitter on its own, independent of the build seed.
    #[must_use]
    pub fn jitter_seed(mut self, seed: u64) -> Self {
        self.options.jitter_seed = Some(seed);
        self
    }

    /// Extra pixels between swarm markers.
    #[must_use]
    pub fn swarm_spacing(mut self, spacing: f32) -> Self {
        self.options.swarm_spacing = spacing;
        self
    }

    /// Statistic for bar and point plots.
    #[must_use]
    pub fn estimator(mut self, estimator: Estimator) -> Self {
        self.options.estimator = estimator;
        self
    }

    /// Error bar for bar and point plots.
    #[must_use]
    pub fn errorbar(mut self, errorbar: ErrorBar) -> Self {
        self.options.errorbar = errorbar;
        self
    }

    /// Bootstrap resamples.
    #[must_use]
    pub fn n_boot(mut self, n_boot: usize) -> Self {
        self.options.n_boot = n_boot;
        self
    }

    /// Box whisker reach in IQRs.
    #[must_use]
    pub fn whis(mut self, whis: f32) -> Self {
        self.options.whis = whis;
        self
    }

    /// Split violins by a two-level hue.
    #[must_use]
    pub fn split(mut self, split: bool) -> Self {
        self.options.split = split;
        self
    }

    /// Inner violin marks.
    #[must_use]
    pub fn inner(mut self, inner: ViolinInner) -> Self {
        self.options.inner = inner;
        self
    }

    /// Violin width normalization.
    #[must_use]
    pub fn violin_scale(mut self, scale: ViolinScale) -> Self {
        self.options.violin_scale = scale;
        self
    }

    /// KDE bandwidth rule.
    #[must_use]
    pub fn bw(mut self, bw: Bandwidth) -> Self {
        self.options.bw = bw;
        self
    }

    /// KDE support extension in bandwidths.
    #[must_use]
    pub fn cut(mut self, cut: f32) -> Self {
        self.options.cut = cut;
        self
    }

    /// Letter-value depth rule.
    #[must_use]
    pub fn k_depth(mut self, k_depth: KDepth) -> Self {
        self.options.k_depth = k_depth;
        self
    }

    /// Fraction of the category band used by one category's elements.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.options.width = width;
        self
    }

    /// Fraction of each dodged slot left empty.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.options.gap = gap;
        self
    }

    /// How dodged slots treat hue levels absent from a category.
    #[must_use]
    pub fn dodge_empty(mut self, empty: DodgeEmpty) -> Self {
        self.options.dodge_empty = empty;
        self
    }

    /// Connect point estimates within a hue level.
    #[must_use]
    pub fn join(mut self, join: bool) -> Self {
        self.options.join = join;
        self
    }

    /// Error bar cap width as a fraction of the element width.
    #[must_use]
    pub fn capsize(mut self, capsize: f32) -> Self {
        self.options.capsize = capsize;
        self
    }

    /// Pixel size of one panel.
    #[must_use]
    pub fn panel_size(&self) -> (u32, u32) {
        let h = (self.height * self.theme.dpi).round().max(1.0);
        let w = (self.height * self.aspect * self.theme.dpi).round().max(1.0);
        (w as u32, h as u32)
    }

    // ------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------

    /// Validate the request and render every panel.
    ///
    /// # Errors
    ///
    /// Configuration errors (unknown kind, missing column or variable, bad
    /// order, split without two hue levels, out-of-range parameter) and data
    /// errors (no numeric values, empty data) are all reported before any
    /// panel is rendered.
    pub fn build(&self) -> Result<Figure> {
        let kind = match &self.kind {
            KindRequest::Kind(kind) => *kind,
            KindRequest::Name(name) => name.parse()?,
        };
        self.validate_parameters()?;
        for var in [&self.x, &self.y, &self.hue, &self.row, &self.col].into_iter().flatten() {
            self.data.require(var)?;
        }
        if self.data.nrow() == 0 {
            return Err(Error::EmptyData);
        }

        let (data, roles) = if self.x.is_none() && self.y.is_none() {
            if self.hue.is_some() || self.row.is_some() || self.col.is_some() {
                return Err(Error::InvalidParameter(
                    "wide-form data cannot be combined with hue, row or col".into(),
                ));
            }
            let long = self.data.melt_numeric(WIDE_VARIABLE, WIDE_VALUE)?;
            let roles = Roles {
                category: WIDE_VARIABLE.to_string(),
                value: Some(WIDE_VALUE.to_string()),
                orient: self.orient.unwrap_or_default(),
            };
            (Cow::Owned(long), roles)
        } else {
            (Cow::Borrowed(&self.data), self.resolve_roles(kind)?)
        };
        tracing::debug!(%kind, orient = ?roles.orient, category = %roles.category, "resolved plot roles");

        let categories = resolve_order(data.require(&roles.category)?, self.order.as_deref())?;
        if categories.is_empty() {
            return Err(Error::EmptyData);
        }
        let hue = self
            .hue
            .as_deref()
            .map(|var| HueGrouping::resolve(&data, var, self.hue_order.as_deref(), &self.theme.palette))
            .transpose()?;

        let split = kind == PlotKind::Violin && self.options.split;
        if split {
            let found = hue.as_ref().map_or(0, HueGrouping::len);
            if found != 2 {
                return Err(Error::SplitRequiresTwoHues { found });
            }
        }

        let facet = Facet::from_vars(self.row.as_deref(), self.col.as_deref(), self.col_wrap)?;
        let grid = FacetGrid::build(&data, &facet, self.row_order.as_deref(), self.col_order.as_deref())?;

        // Validation is complete; everything below only renders.
        let n_hue = hue.as_ref().map_or(1, HueGrouping::len).max(1);
        let dodge = hue.is_some() && !split && self.dodge.unwrap_or(true);
        let layout =
            DodgeLayout::new(n_hue, self.options.width, self.options.gap, dodge).empty(self.options.dodge_empty);
        let colors: Vec<Rgba> = match &hue {
            Some(h) => (0..h.len()).map(|i| h.color(i)).collect(),
            None => self.theme.palette.colors(1),
        };

        let slot_of = |row: usize| -> Option<(usize, usize)> {
            let category = categories.position_of(data.value(row, &roles.category)?)?;
            let level = match &hue {
                Some(h) => h.axis().position_of(data.value(row, h.variable())?)?,
                None => 0,
            };
            Some((category, level))
        };
        let value_of = |row: usize| -> Option<f32> {
            data.value(row, roles.value.as_deref()?).and_then(DataValue::as_f32)
        };

        let (px_per_category, px_per_value) =
            self.pixel_scales(&roles, categories.len(), &data, &slot_of, &value_of);
        tracing::debug!(
            panels = grid.cells().len(),
            categories = categories.len(),
            hue_levels = n_hue,
            dodge,
            "rendering panels"
        );

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut dropped = 0usize;
        let mut panels = Vec::with_capacity(grid.cells().len());
        for cell in grid.cells() {
            let mut groups: Vec<Group> = (0..categories.len() * n_hue)
                .map(|i| Group {
                    category: i / n_hue,
                    hue: i % n_hue,
                    values: Vec::new(),
                    count: 0,
                })
                .collect();
            for &row in &cell.rows {
                let Some((category, level)) = slot_of(row) else {
                    dropped += 1;
                    continue;
                };
                let group = &mut groups[category * n_hue + level];
                group.count += 1;
                if let Some(value) = value_of(row) {
                    group.values.push(value);
                }
            }
            groups.retain(|g| g.count > 0);
            let layout = layout.fit(groups.iter().map(|g| (g.category, g.hue)));

            let ctx = PanelContext {
                groups: &groups,
                n_categories: categories.len(),
                colors: &colors,
                dodge: &layout,
                orient: roles.orient,
                theme: &self.theme,
                options: &self.options,
                px_per_category,
                px_per_value,
            };
            let draw = plots::render(kind, &ctx, &mut rng);
            panels.push(Panel {
                row: cell.row,
                col: cell.col,
                title: cell.title(grid.row_var(), grid.col_var()),
                groups,
                draw,
            });
        }
        if dropped > 0 {
            tracing::warn!(dropped, "rows without a drawable category or hue level were skipped");
        }

        let value_range = value_range(&panels, roles.orient, matches!(kind, PlotKind::Bar | PlotKind::Count));
        let legend = match &hue {
            Some(h) if self.legend => h.legend(),
            _ => Vec::new(),
        };
        let value_label = match (&roles.value, kind) {
            (_, PlotKind::Count) => "count".to_string(),
            (Some(v), _) => v.clone(),
            (None, _) => String::new(),
        };

        Ok(Figure {
            kind,
            orient: roles.orient,
            nrows: grid.nrows(),
            ncols: grid.ncols(),
            panel_size: self.panel_size(),
            panels,
            category_axis: categories,
            category_label: roles.category,
            value_label,
            value_range,
            legend,
            hue_label: hue.map(|h| h.variable().to_string()),
            theme: self.theme.clone(),
        })
    }

    fn resolve_roles(&self, kind: PlotKind) -> Result<Roles> {
        match (&self.x, &self.y) {
            (Some(x), None) if !kind.needs_values() => Ok(Roles {
                category: x.clone(),
                value: None,
                orient: Orient::Vertical,
            }),
            (None, Some(y)) if !kind.needs_values() => Ok(Roles {
                category: y.clone(),
                value: None,
                orient: Orient::Horizontal,
            }),
            (Some(_), None) => Err(Error::MissingVariable(format!("{kind} plots need a y variable"))),
            (None, Some(_)) => Err(Error::MissingVariable(format!("{kind} plots need an x variable"))),
            (Some(_), Some(_)) if !kind.needs_values() => Err(Error::InvalidParameter(
                "count plots take only one of x and y".into(),
            )),
            (Some(x), Some(y)) => {
                let orient = match self.orient {
                    Some(orient) => orient,
                    None => {
                        let x_numeric = self.data.require(x)?.is_numeric();
                        let y_numeric = self.data.require(y)?.is_numeric();
                        match (x_numeric, y_numeric) {
                            (true, false) => Orient::Horizontal,
                            (false, false) => return Err(Error::NoNumericData { column: y.clone() }),
                            _ => Orient::Vertical,
                        }
                    }
                };
                let (category, value) = match orient {
                    Orient::Vertical => (x, y),
                    Orient::Horizontal => (y, x),
                };
                if !self.data.require(value)?.has_numbers() {
                    return Err(Error::NoNumericData { column: value.clone() });
                }
                Ok(Roles {
                    category: category.clone(),
                    value: Some(value.clone()),
                    orient,
                })
            }
            (None, None) => Err(Error::MissingVariable("x or y".into())),
        }
    }

    fn validate_parameters(&self) -> Result<()> {
        let invalid = |what: &str| Err(Error::InvalidParameter(what.to_string()));
        let o = &self.options;

        if !(self.height.is_finite() && self.height > 0.0) {
            return invalid("height must be positive");
        }
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return invalid("aspect must be positive");
        }
        if !(o.width > 0.0 && o.width <= 1.0) {
            return invalid("width must be in (0, 1]");
        }
        if !(0.0..1.0).contains(&o.gap) {
            return invalid("gap must be in [0, 1)");
        }
        if !(o.jitter >= 0.0 && o.cut >= 0.0 && o.whis >= 0.0 && o.capsize >= 0.0) {
            return invalid("jitter, cut, whis and capsize must be non-negative");
        }
        if !(o.value_jitter >= 0.0 && o.swarm_spacing >= 0.0) {
            return invalid("value_jitter and swarm_spacing must be non-negative");
        }
        if o.gridsize < 2 {
            return invalid("gridsize must be at least 2");
        }
        match o.errorbar {
            ErrorBar::Ci(level) | ErrorBar::Pi(level) if !(level > 0.0 && level <= 100.0) => {
                return invalid("error bar level must be in (0, 100]");
            }
            ErrorBar::Sd(scale) | ErrorBar::Se(scale) if !(scale >= 0.0) => {
                return invalid("error bar scale must be non-negative");
            }
            _ => {}
        }
        if matches!(o.bw, Bandwidth::Factor(f) if !(f > 0.0)) {
            return invalid("bandwidth factor must be positive");
        }
        if matches!(o.k_depth, KDepth::Proportion(p) | KDepth::Trustworthy(p) if !(p > 0.0 && p < 1.0)) {
            return invalid("k_depth proportion and alpha must be in (0, 1)");
        }
        Ok(())
    }

    /// Pixels per category unit and per value unit for one panel.
    fn pixel_scales(
        &self,
        roles: &Roles,
        n_categories: usize,
        data: &DataFrame,
        slot_of: &dyn Fn(usize) -> Option<(usize, usize)>,
        value_of: &dyn Fn(usize) -> Option<f32>,
    ) -> (f32, f32) {
        let (w, h) = self.panel_size();
        let margin = 2.0 * self.theme.margin as f32;
        let (cat_px, val_px) = match roles.orient {
            Orient::Vertical => (w as f32 - margin, h as f32 - margin),
            Orient::Horizontal => (h as f32 - margin, w as f32 - margin),
        };

        let values: Vec<f32> = (0..data.nrow())
            .filter(|&r| slot_of(r).is_some())
            .filter_map(value_of)
            .collect();
        let (lo, hi) = crate::stats::min_max(&values).unwrap_or((0.0, 1.0));
        let span = (hi - lo).max(f32::EPSILON) * (1.0 + 2.0 * VALUE_PADDING);

        (
            cat_px.max(1.0) / n_categories.max(1) as f32,
            val_px.max(1.0) / span,
        )
    }
}

impl batuta_common::display::WithDimensions for CatPlot {
    /// Set the pixel size of one panel; height and aspect follow from it.
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.height = height as f32 / self.theme.dpi;
        self.aspect = width as f32 / height.max(1) as f32;
    }
}

fn value_range(panels: &[Panel], orient: Orient, from_zero: bool) -> (f32, f32) {
    let (mut lo, mut hi) = (f32::MAX, f32::MIN);
    for bounds in panels.iter().filter_map(|p| p.draw.bounds()) {
        let (a, b) = match orient {
            Orient::Vertical => (bounds.y, bounds.y + bounds.height),
            Orient::Horizontal => (bounds.x, bounds.x + bounds.width),
        };
        lo = lo.min(a);
        hi = hi.max(b);
    }
    if lo > hi {
        return (0.0, 1.0);
    }
    if from_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if hi - lo <= f32::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = (hi - lo) * VALUE_PADDING;
    let lo = if from_zero && lo == 0.0 { 0.0 } else { lo - pad };
    let hi = if from_zero && hi == 0.0 { 0.0 } else { hi + pad };
    (lo, hi)
}

/// One rendered facet cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
    /// Facet title, empty without faceting.
    pub title: String,
    /// Observation groups drawn in this panel.
    pub groups: Vec<Group>,
    /// Drawing instructions.
    pub draw: DrawList,
}

/// A rendered grid of panels plus the axis and legend information shared by
/// all of them.
#[derive(Debug, Clone)]
pub struct Figure {
    kind: PlotKind,
    orient: Orient,
    nrows: usize,
    ncols: usize,
    panel_size: (u32, u32),
    panels: Vec<Panel>,
    category_axis: CategoryAxis,
    category_label: String,
    value_label: String,
    value_range: (f32, f32),
    legend: Vec<(String, Rgba)>,
    hue_label: Option<String>,
    theme: Theme,
}

impl Figure {
    /// Plot kind that produced the figure.
    #[must_use]
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    /// Orientation shared by all panels.
    #[must_use]
    pub fn orient(&self) -> Orient {
        self.orient
    }

    /// Grid rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Grid columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Pixel size of one panel.
    #[must_use]
    pub fn panel_size(&self) -> (u32, u32) {
        self.panel_size
    }

    /// Pixel size of the whole grid, margins included.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let (w, h) = self.panel_size;
        let legend = if self.legend.is_empty() { 0 } else { LEGEND_WIDTH };
        (w * self.ncols.max(1) as u32 + legend, h * self.nrows.max(1) as u32)
    }

    /// Panels, row-major.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panel at a grid position. Wrapped grids may leave trailing positions empty.
    #[must_use]
    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        self.panels.iter().find(|p| p.row == row && p.col == col)
    }

    /// Category axis shared by all panels.
    #[must_use]
    pub fn category_axis(&self) -> &CategoryAxis {
        &self.category_axis
    }

    /// Name of the categorical variable.
    #[must_use]
    pub fn category_label(&self) -> &str {
        &self.category_label
    }

    /// Name of the value variable (`count` for count plots).
    #[must_use]
    pub fn value_label(&self) -> &str {
        &self.value_label
    }

    /// Value axis limits shared by all panels.
    #[must_use]
    pub fn value_range(&self) -> (f32, f32) {
        self.value_range
    }

    /// Legend entries: one (label, color) per hue level.
    #[must_use]
    pub fn legend(&self) -> &[(String, Rgba)] {
        &self.legend
    }

    /// Name of the hue variable, if any.
    #[must_use]
    pub fn hue_label(&self) -> Option<&str> {
        self.hue_label.as_deref()
    }

    /// Theme used to build the figure.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batuta_common::display::WithDimensions;

    fn tips() -> DataFrame {
        DataFrame::new()
            .with_str("day", &["Thu", "Fri", "Sat", "Sun", "Thu", "Sat"])
            .with_str("sex", &["Male", "Female", "Male", "Female", "Female", "Male"])
            .with_f32("total_bill", &[10.0, 20.0, 30.0, 25.0, 12.0, 28.0])
    }

    #[test]
    fn test_orientation_inferred() {
        let fig = CatPlot::new(tips()).x("total_bill").y("day").kind(PlotKind::Box).build().unwrap();
        assert_eq!(fig.orient(), Orient::Horizontal);
        assert_eq!(fig.category_label(), "day");

        let fig = CatPlot::new(tips()).x("day").y("total_bill").kind(PlotKind::Box).build().unwrap();
        assert_eq!(fig.orient(), Orient::Vertical);
    }

    #[test]
    fn test_kind_name_parsed_at_build() {
        let plot = CatPlot::new(tips()).x("day").y("total_bill").kind_name("pie");
        assert!(matches!(plot.build(), Err(Error::UnknownKind(_))));
        let fig = plot.kind_name("violin").build().unwrap();
        assert_eq!(fig.kind(), PlotKind::Violin);
    }

    #[test]
    fn test_parameter_validation() {
        let base = CatPlot::new(tips()).x("day").y("total_bill");
        assert!(base.clone().width(0.0).build().unwrap_err().is_configuration());
        assert!(base.clone().gap(1.0).build().is_err());
        assert!(base.clone().height(-1.0).build().is_err());
        assert!(base.clone().errorbar(ErrorBar::Ci(0.0)).build().is_err());
        assert!(base.clone().k_depth(KDepth::Proportion(1.5)).build().is_err());
        assert!(base.clone().bw(Bandwidth::Factor(0.0)).build().is_err());
        assert!(base.build().is_ok());
    }

    #[test]
    fn test_missing_variable() {
        let err = CatPlot::new(tips()).x("day").kind(PlotKind::Bar).build().unwrap_err();
        assert!(matches!(err, Error::MissingVariable(_)));
        let err = CatPlot::new(tips()).x("day").y("day").kind(PlotKind::Count).build().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_no_numeric_data() {
        let err = CatPlot::new(tips()).x("day").y("sex").kind(PlotKind::Box).build().unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_wide_form_melts_numeric_columns() {
        let wide = DataFrame::new()
            .with_f32("a", &[1.0, 2.0, 3.0])
            .with_str("label", &["p", "q", "r"])
            .with_f32("b", &[4.0, 5.0, 6.0]);
        let fig = CatPlot::new(wide).kind(PlotKind::Box).build().unwrap();
        assert_eq!(fig.category_axis().labels(), ["a", "b"]);
        assert_eq!(fig.panels()[0].draw.rects().len(), 2);

        let err = CatPlot::new(tips()).hue("sex").build().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_set_dimensions() {
        let plot = CatPlot::new(tips()).dimensions(800, 400);
        assert_eq!(plot.panel_size(), (800, 400));
    }

    #[test]
    fn test_value_range_padding() {
        let fig = CatPlot::new(tips())
            .x("day")
            .y("total_bill")
            .kind(PlotKind::Count)
            .build();
        assert!(fig.is_err());

        let fig = CatPlot::new(tips()).x("day").kind(PlotKind::Count).build().unwrap();
        let (lo, hi) = fig.value_range();
        assert_eq!(lo, 0.0);
        assert!(hi > 2.0);
        assert_eq!(fig.value_label(), "count");
    }
}
