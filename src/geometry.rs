//! Geometric primitives for drawing instructions.
//!
//! Coordinates are in data space: the categorical axis is measured in category
//! units (category `i` sits at `i as f32`), the value axis in data units.

/// Plot orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Orient {
    /// Categories along x, values along y.
    #[default]
    Vertical,
    /// Categories along y, values along x.
    Horizontal,
}

impl Orient {
    /// Map a (category position, value) pair to an (x, y) point.
    #[must_use]
    pub fn point(self, pos: f32, value: f32) -> Point {
        match self {
            Orient::Vertical => Point::new(pos, value),
            Orient::Horizontal => Point::new(value, pos),
        }
    }

    /// Rectangle spanning `[pos0, pos1]` on the category axis and
    /// `[v0, v1]` on the value axis.
    #[must_use]
    pub fn rect(self, pos0: f32, pos1: f32, v0: f32, v1: f32) -> Rect {
        Rect::from_corners(self.point(pos0, v0), self.point(pos1, v1))
    }
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle. `x`/`y` is the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Minimum x.
    pub x: f32,
    /// Minimum y.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from any two opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    /// Check if a point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        let r = Rect::from_corners(Point::new(4.0, 5.0), Point::new(1.0, 1.0));
        assert_eq!(r, Rect::new(1.0, 1.0, 3.0, 4.0));
        assert!(r.contains(Point::new(2.0, 2.0)));
        assert!(!r.contains(Point::new(5.0, 2.0)));
        assert_eq!(r.center(), Point::new(2.5, 3.0));
    }

    #[test]
    fn test_orient_swaps_axes() {
        assert_eq!(Orient::Vertical.point(1.0, 7.0), Point::new(1.0, 7.0));
        assert_eq!(Orient::Horizontal.point(1.0, 7.0), Point::new(7.0, 1.0));
        let r = Orient::Horizontal.rect(0.6, 1.4, 0.0, 10.0);
        assert!((r.width - 10.0).abs() < 1e-6);
        assert!((r.height - 0.8).abs() < 1e-6);
    }
}
