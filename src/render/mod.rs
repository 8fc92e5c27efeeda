//! Abstract drawing instructions.
//!
//! Renderers emit [`DrawCommand`]s in data space. Line widths and marker sizes
//! are in pixels; everything positional is converted by the output encoder.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

/// Marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Filled circle.
    #[default]
    Circle,
    /// Diamond (square rotated 45 degrees).
    Diamond,
    /// Axis-aligned square.
    Square,
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle with optional outline.
    Rect {
        /// Extent in data space.
        rect: Rect,
        /// Fill color.
        fill: Rgba,
        /// Outline color.
        stroke: Option<Rgba>,
        /// Outline width in pixels.
        stroke_width: f32,
    },
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Rgba,
        /// Stroke width in pixels.
        width: f32,
    },
    /// Connected segments.
    Polyline {
        /// Vertices in order.
        points: Vec<Point>,
        /// Stroke color.
        color: Rgba,
        /// Stroke width in pixels.
        width: f32,
    },
    /// Closed filled shape.
    Polygon {
        /// Vertices in order; the last connects back to the first.
        points: Vec<Point>,
        /// Fill color.
        fill: Rgba,
        /// Outline color.
        stroke: Option<Rgba>,
        /// Outline width in pixels.
        stroke_width: f32,
    },
    /// A single marker.
    Marker {
        /// Center.
        at: Point,
        /// Shape.
        shape: Marker,
        /// Diameter in pixels.
        size: f32,
        /// Fill color.
        fill: Rgba,
        /// Edge color.
        stroke: Option<Rgba>,
    },
}

impl DrawCommand {
    /// Data-space points touched by this command.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match self {
            DrawCommand::Rect { rect, .. } => vec![
                Point::new(rect.x, rect.y),
                Point::new(rect.x + rect.width, rect.y + rect.height),
            ],
            DrawCommand::Line { from, to, .. } => vec![*from, *to],
            DrawCommand::Polyline { points, .. } | DrawCommand::Polygon { points, .. } => points.clone(),
            DrawCommand::Marker { at, .. } => vec![*at],
        }
    }
}

/// Ordered drawing instructions of one panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterate commands in drawing order.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All rectangles.
    #[must_use]
    pub fn rects(&self) -> Vec<&Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, .. } => Some(rect),
                _ => None,
            })
            .collect()
    }

    /// Centers of all markers.
    #[must_use]
    pub fn markers(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Marker { at, .. } => Some(*at),
                _ => None,
            })
            .collect()
    }

    /// Data-space bounding box, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(DrawCommand::points);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(lo, hi), p| {
            (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y)))
        });
        Some(Rect::from_corners(min, max))
    }
}

impl Extend<DrawCommand> for DrawList {
    fn extend<T: IntoIterator<Item = DrawCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

impl FromIterator<DrawCommand> for DrawList {
    fn from_iter<T: IntoIterator<Item = DrawCommand>>(iter: T) -> Self {
        Self { commands: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(x: f32, y: f32) -> DrawCommand {
        DrawCommand::Marker {
            at: Point::new(x, y),
            shape: Marker::Circle,
            size: 5.0,
            fill: Rgba::BLACK,
            stroke: None,
        }
    }

    #[test]
    fn test_draw_list_filters() {
        let mut list = DrawList::new();
        assert!(list.is_empty());
        list.push(marker(0.0, 1.0));
        list.push(DrawCommand::Rect {
            rect: Rect::new(-0.4, 0.0, 0.8, 3.0),
            fill: Rgba::WHITE,
            stroke: None,
            stroke_width: 1.0,
        });
        list.extend([marker(1.0, 2.0)]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.rects().len(), 1);
        assert_eq!(list.markers(), vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_bounds() {
        assert!(DrawList::new().bounds().is_none());
        let list: DrawList = vec![
            marker(0.0, 5.0),
            DrawCommand::Line {
                from: Point::new(-0.5, 1.0),
                to: Point::new(2.0, 3.0),
                color: Rgba::BLACK,
                width: 1.0,
            },
        ]
        .into_iter()
        .collect();
        assert_eq!(list.bounds(), Some(Rect::new(-0.5, 1.0, 2.5, 4.0)));
    }
}
