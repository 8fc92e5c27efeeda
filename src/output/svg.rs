//! SVG output encoder.
//!
//! Turns a [`Figure`] into a standalone SVG document: one plot area per
//! panel with grid lines, tick labels, category labels and titles, plus a
//! legend column when the figure has hue levels.

use crate::categorical::Figure;
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Orient, Point};
use crate::render::{DrawCommand, Marker};
use crate::scale::{CategoryScale, LinearScale, Scale};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Approximate number of value-axis ticks.
const TICK_COUNT: usize = 5;

/// SVG encoder for figures and free-form vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Circle
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
    },
    /// Line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Open polyline, or a closed polygon when `fill` is set
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Option<Rgba>,
        stroke_width: f32,
        fill: Option<Rgba>,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Pixel mapping of one panel's plot area.
struct PanelScales {
    category: CategoryScale,
    value: LinearScale,
    orient: Orient,
}

impl PanelScales {
    fn map(&self, p: Point) -> (f32, f32) {
        match self.orient {
            Orient::Vertical => (self.category.scale(p.x), self.value.scale(p.y)),
            Orient::Horizontal => (self.value.scale(p.x), self.category.scale(p.y)),
        }
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Lay out every panel of `figure`.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure has no categories.
    pub fn from_figure(figure: &Figure) -> Result<Self> {
        let theme = figure.theme();
        let (total_w, total_h) = figure.size();
        let mut encoder = Self::new(total_w, total_h).background(Some(theme.background));

        let (pw, ph) = figure.panel_size();
        let margin = theme.margin as f32;
        let n_cat = figure.category_axis().len();
        let (v_lo, v_hi) = figure.value_range();

        for panel in figure.panels() {
            let x0 = panel.col as f32 * pw as f32 + margin;
            let y0 = panel.row as f32 * ph as f32 + margin;
            let w = (pw as f32 - 2.0 * margin).max(1.0);
            let h = (ph as f32 - 2.0 * margin).max(1.0);

            let scales = match figure.orient() {
                Orient::Vertical => PanelScales {
                    category: CategoryScale::new(n_cat, (x0, x0 + w))?,
                    value: LinearScale::new((v_lo, v_hi), (y0 + h, y0))?,
                    orient: Orient::Vertical,
                },
                Orient::Horizontal => PanelScales {
                    category: CategoryScale::new(n_cat, (y0, y0 + h))?,
                    value: LinearScale::new((v_lo, v_hi), (x0, x0 + w))?,
                    orient: Orient::Horizontal,
                },
            };

            encoder.add_element(SvgElement::Rect {
                x: x0,
                y: y0,
                width: w,
                height: h,
                fill: theme.panel_background,
                stroke: None,
                stroke_width: 0.0,
            });
            encoder.add_axes(figure, &scales, (x0, y0, w, h));
            for command in &panel.draw {
                encoder.add_command(command, &scales);
            }
            if !panel.title.is_empty() {
                encoder.add_element(SvgElement::Text {
                    x: x0 + w / 2.0,
                    y: y0 - theme.font_size * 0.6,
                    text: panel.title.clone(),
                    font_size: theme.font_size,
                    fill: theme.text_color,
                    anchor: TextAnchor::Middle,
                });
            }
        }

        encoder.add_legend(figure);
        Ok(encoder)
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Elements in drawing order.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    fn add_axes(&mut self, figure: &Figure, scales: &PanelScales, (x0, y0, w, h): (f32, f32, f32, f32)) {
        let theme = figure.theme();
        let font = theme.font_size;
        let vertical = scales.orient == Orient::Vertical;

        for tick in scales.value.ticks(TICK_COUNT) {
            let p = scales.value.scale(tick);
            let (x1, y1, x2, y2) = if vertical { (x0, p, x0 + w, p) } else { (p, y0, p, y0 + h) };
            if theme.show_grid {
                self.add_element(SvgElement::Line { x1, y1, x2, y2, stroke: theme.grid_color, stroke_width: theme.grid_width });
            }
            let (tx, ty, anchor) = if vertical {
                (x0 - 4.0, p + font / 3.0, TextAnchor::End)
            } else {
                (p, y0 + h + font + 2.0, TextAnchor::Middle)
            };
            self.add_element(SvgElement::Text { x: tx, y: ty, text: tick_label(tick), font_size: font * 0.9, fill: theme.text_color, anchor });
        }

        for (i, label) in figure.category_axis().labels().iter().enumerate() {
            let p = scales.category.scale(i as f32);
            let (tx, ty, anchor) = if vertical {
                (p, y0 + h + font + 2.0, TextAnchor::Middle)
            } else {
                (x0 - 4.0, p + font / 3.0, TextAnchor::End)
            };
            self.add_element(SvgElement::Text { x: tx, y: ty, text: label.clone(), font_size: font * 0.9, fill: theme.text_color, anchor });
        }

        let (bottom, left) = if vertical {
            (figure.category_label(), figure.value_label())
        } else {
            (figure.value_label(), figure.category_label())
        };
        self.add_element(SvgElement::Text {
            x: x0 + w / 2.0,
            y: y0 + h + 2.0 * font + 6.0,
            text: bottom.to_string(),
            font_size: font,
            fill: theme.text_color,
            anchor: TextAnchor::Middle,
        });
        self.add_element(SvgElement::Text {
            x: (x0 - theme.margin as f32 + 2.0).max(0.0),
            y: y0 - 4.0,
            text: left.to_string(),
            font_size: font,
            fill: theme.text_color,
            anchor: TextAnchor::Start,
        });

        if theme.show_ticks || !theme.show_grid {
            let stroke = theme.axis_color;
            let stroke_width = theme.axis_width;
            self.add_element(SvgElement::Line { x1: x0, y1: y0 + h, x2: x0 + w, y2: y0 + h, stroke, stroke_width });
            self.add_element(SvgElement::Line { x1: x0, y1: y0, x2: x0, y2: y0 + h, stroke, stroke_width });
        }
    }

    fn add_command(&mut self, command: &DrawCommand, scales: &PanelScales) {
        match command {
            DrawCommand::Rect { rect, fill, stroke, stroke_width } => {
                let (ax, ay) = scales.map(Point::new(rect.x, rect.y));
                let (bx, by) = scales.map(Point::new(rect.x + rect.width, rect.y + rect.height));
                self.add_element(SvgElement::Rect {
                    x: ax.min(bx),
                    y: ay.min(by),
                    width: (bx - ax).abs(),
                    height: (by - ay).abs(),
                    fill: *fill,
                    stroke: *stroke,
                    stroke_width: *stroke_width,
                });
            }
            DrawCommand::Line { from, to, color, width } => {
                let (x1, y1) = scales.map(*from);
                let (x2, y2) = scales.map(*to);
                self.add_element(SvgElement::Line { x1, y1, x2, y2, stroke: *color, stroke_width: *width });
            }
            DrawCommand::Polyline { points, color, width } => {
                self.add_element(SvgElement::Polyline {
                    points: points.iter().map(|p| scales.map(*p)).collect(),
                    stroke: Some(*color),
                    stroke_width: *width,
                    fill: None,
                });
            }
            DrawCommand::Polygon { points, fill, stroke, stroke_width } => {
                self.add_element(SvgElement::Polyline {
                    points: points.iter().map(|p| scales.map(*p)).collect(),
                    stroke: *stroke,
                    stroke_width: *stroke_width,
                    fill: Some(*fill),
                });
            }
            DrawCommand::Marker { at, shape, size, fill, stroke } => {
                let (cx, cy) = scales.map(*at);
                let r = size / 2.0;
                let element = match shape {
                    Marker::Circle => SvgElement::Circle { cx, cy, r, fill: *fill, stroke: *stroke },
                    Marker::Square => SvgElement::Rect {
                        x: cx - r,
                        y: cy - r,
                        width: *size,
                        height: *size,
                        fill: *fill,
                        stroke: *stroke,
                        stroke_width: 1.0,
                    },
                    Marker::Diamond => SvgElement::Polyline {
                        points: vec![(cx, cy - r), (cx + r, cy), (cx, cy + r), (cx - r, cy)],
                        stroke: *stroke,
                        stroke_width: 1.0,
                        fill: Some(*fill),
                    },
                };
                self.add_element(element);
            }
        }
    }

    fn add_legend(&mut self, figure: &Figure) {
        let entries = figure.legend();
        if entries.is_empty() {
            return;
        }
        let theme = figure.theme();
        let font = theme.font_size;
        let (pw, _) = figure.panel_size();
        let x = pw as f32 * figure.ncols().max(1) as f32 + 10.0;
        let mut y = theme.margin as f32;

        if let Some(title) = figure.hue_label() {
            self.add_element(SvgElement::Text { x, y, text: title.to_string(), font_size: font, fill: theme.text_color, anchor: TextAnchor::Start });
            y += font * 1.6;
        }
        for (label, color) in entries {
            self.add_element(SvgElement::Rect {
                x,
                y: y - font * 0.8,
                width: font,
                height: font,
                fill: theme.fill(*color),
                stroke: None,
                stroke_width: 0.0,
            });
            self.add_element(SvgElement::Text {
                x: x + font * 1.5,
                y,
                text: label.clone(),
                font_size: font * 0.9,
                fill: theme.text_color,
                anchor: TextAnchor::Start,
            });
            y += font * 1.6;
        }
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(bg)
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Tick text without trailing zeros.
fn tick_label(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn stroke_attr(stroke: Option<Rgba>, width: f32) -> String {
    stroke
        .map(|s| format!(r#" stroke="{}" stroke-width="{width}""#, rgba_to_css(s)))
        .unwrap_or_default()
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect { x, y, width, height, fill, stroke, stroke_width } => format!(
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"{}/>"#,
            rgba_to_css(*fill),
            stroke_attr(*stroke, *stroke_width)
        ),
        SvgElement::Circle { cx, cy, r, fill, stroke } => format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"{}/>"#,
            rgba_to_css(*fill),
            stroke_attr(*stroke, 1.0)
        ),
        SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width } => format!(
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
            rgba_to_css(*stroke)
        ),
        SvgElement::Polyline { points, stroke, stroke_width, fill } => {
            let points_str = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            let (tag, fill_attr) = match fill {
                Some(f) => ("polygon", rgba_to_css(*f)),
                None => ("polyline", "none".to_string()),
            };
            format!(
                r#"<{tag} points="{points_str}" fill="{fill_attr}"{}/>"#,
                stroke_attr(*stroke, *stroke_width)
            )
        }
        SvgElement::Text { x, y, text, font_size, fill, anchor } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}" font-family="sans-serif">{}</text>"#,
                rgba_to_css(*fill),
                escape(text)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorical::{CatPlot, PlotKind};
    use crate::data::DataFrame;

    fn figure(kind: PlotKind) -> Figure {
        let data = DataFrame::new()
            .with_str("day", &["Thu", "Fri", "Thu", "Fri", "Sat"])
            .with_str("sex", &["M", "F", "F", "M", "F"])
            .with_f32("tip", &[1.0, 2.5, 3.0, 2.0, 4.5]);
        CatPlot::new(data)
            .x("day")
            .y("tip")
            .hue("sex")
            .kind(kind)
            .seed(1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_document() {
        let svg = SvgEncoder::from_figure(&figure(PlotKind::Bar)).unwrap().render();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(">Thu</text>"));
        assert!(svg.contains(">sex</text>"));
    }

    #[test]
    fn test_bars_map_into_plot_area() {
        let fig = figure(PlotKind::Bar);
        let encoder = SvgEncoder::from_figure(&fig).unwrap();
        let (w, h) = fig.panel_size();
        let (w, h) = (w as f32, h as f32);
        let m = fig.theme().margin as f32;
        let bars: Vec<(f32, f32, f32, f32)> = encoder
            .elements()
            .iter()
            .filter_map(|e| match e {
                // panel background and legend swatches excluded
                SvgElement::Rect { x, y, width, height, .. } if *width < w / 2.0 && *x < w => {
                    Some((*x, *y, *width, *height))
                }
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 5);
        for (x, y, width, height) in bars {
            assert!(x >= m - 1e-3 && x + width <= w - m + 1e-3);
            assert!(y >= m - 1e-3 && y + height <= h - m + 1e-3);
        }
    }

    #[test]
    fn test_violin_outline_is_polygon() {
        let data = DataFrame::new()
            .with_str("g", &["a", "a", "a", "b", "b", "b"])
            .with_f32("v", &[1.0, 2.0, 4.0, 3.0, 5.0, 6.5]);
        let fig = CatPlot::new(data).x("g").y("v").kind(PlotKind::Violin).build().unwrap();
        let svg = SvgEncoder::from_figure(&fig).unwrap().render();
        assert!(svg.contains("<polygon"));
        assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="500""#));
    }

    #[test]
    fn test_escape_text() {
        let mut encoder = SvgEncoder::new(10, 10).background(None);
        encoder.add_element(SvgElement::Text {
            x: 0.0,
            y: 0.0,
            text: "a<b & c".into(),
            font_size: 10.0,
            fill: Rgba::BLACK,
            anchor: TextAnchor::Start,
        });
        let svg = encoder.render();
        assert!(svg.contains("a&lt;b &amp; c"));
        assert!(!svg.contains("100%"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        SvgEncoder::from_figure(&figure(PlotKind::Box)).unwrap().write_to_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<rect"));
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(tick_label(2.0), "2");
        assert_eq!(tick_label(0.25), "0.25");
        assert_eq!(tick_label(-0.0), "0");
    }
}
