//! Theme: the non-data appearance of a figure.
//!
//! A `Theme` is passed to the plot builder explicitly; there is no
//! process-wide style state.

use crate::color::{Palette, Rgba};

/// Theme specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Palette for hue levels (and for categories when there is no hue).
    pub palette: Palette,
    /// Figure background color.
    pub background: Rgba,
    /// Panel background color.
    pub panel_background: Rgba,
    /// Grid line color.
    pub grid_color: Rgba,
    /// Axis line color.
    pub axis_color: Rgba,
    /// Text color.
    pub text_color: Rgba,
    /// Color of box edges, whiskers, medians and error bars.
    pub line_color: Rgba,
    /// Show value-axis grid lines.
    pub show_grid: bool,
    /// Draw tick marks on the axes.
    pub show_ticks: bool,
    /// Grid line width in pixels.
    pub grid_width: f32,
    /// Axis line width in pixels.
    pub axis_width: f32,
    /// Width of box edges, whiskers and error bars in pixels.
    pub line_width: f32,
    /// Scatter marker diameter in pixels.
    pub marker_size: f32,
    /// Saturation applied to filled artists (boxes, violins, bars).
    pub saturation: f32,
    /// Pixels per inch; panel `height` is given in inches.
    pub dpi: f32,
    /// Margin around each panel in pixels.
    pub margin: u32,
    /// Font size in pixels.
    pub font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::deep()
    }
}

impl Theme {
    /// Grey panel with white grid lines.
    #[must_use]
    pub fn deep() -> Self {
        Self {
            palette: Palette::Deep,
            background: Rgba::WHITE,
            panel_background: Rgba::rgb(234, 234, 242),
            grid_color: Rgba::WHITE,
            axis_color: Rgba::WHITE,
            text_color: Rgba::rgb(38, 38, 38),
            line_color: Rgba::GRAY,
            show_grid: true,
            show_ticks: false,
            grid_width: 1.0,
            axis_width: 1.25,
            line_width: 1.5,
            marker_size: 5.0,
            saturation: 0.75,
            dpi: 100.0,
            margin: 40,
            font_size: 11.0,
        }
    }

    /// White panel with light grid lines.
    #[must_use]
    pub fn white() -> Self {
        Self {
            panel_background: Rgba::WHITE,
            grid_color: Rgba::rgb(204, 204, 204),
            axis_color: Rgba::rgb(38, 38, 38),
            show_grid: false,
            ..Self::deep()
        }
    }

    /// Dark panel for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(30, 30, 30),
            panel_background: Rgba::rgb(40, 40, 40),
            grid_color: Rgba::rgb(60, 60, 60),
            axis_color: Rgba::rgb(180, 180, 180),
            text_color: Rgba::rgb(220, 220, 220),
            line_color: Rgba::rgb(200, 200, 200),
            grid_width: 0.5,
            axis_width: 0.5,
            ..Self::deep()
        }
    }

    /// White panel, no grid, tick marks on the axes.
    #[must_use]
    pub fn ticks() -> Self {
        Self {
            show_ticks: true,
            ..Self::white()
        }
    }

    /// Look up a preset by name (`deep`, `white`, `dark`, `ticks`).
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "deep" | "darkgrid" => Some(Self::deep()),
            "white" | "whitegrid" => Some(Self::white()),
            "dark" => Some(Self::dark()),
            "ticks" => Some(Self::ticks()),
            _ => None,
        }
    }

    /// Set the palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set marker diameter in pixels.
    #[must_use]
    pub fn marker_size(mut self, size: f32) -> Self {
        self.marker_size = size.max(0.0);
        self
    }

    /// Set line width in pixels.
    #[must_use]
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.0);
        self
    }

    /// Set saturation of filled artists (clamped to 0..=1).
    #[must_use]
    pub fn saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation.clamp(0.0, 1.0);
        self
    }

    /// Set pixels per inch.
    #[must_use]
    pub fn dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi.max(1.0);
        self
    }

    /// Set margin.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Enable or disable grid lines.
    #[must_use]
    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Fill color for an artist of base color `color`.
    #[must_use]
    pub fn fill(&self, color: Rgba) -> Rgba {
        color.desaturate(self.saturation)
    }
}
