//! Layout geometry for nodes, pins and connection curves.
//!
//! Everything here is a pure function of its inputs. Pin positions are
//! recomputed on every read so a moved node never leaves a stale anchor behind.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::model::PinDirection;

/// A point in surface coordinates (origin at the canvas top-left).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let d = self - other;
        (d.dx * d.dx + d.dy * d.dy).sqrt()
    }
}

/// A displacement between two points.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

/// Axis-aligned rectangle, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn from_min_size(min: Point, width: f32, height: f32) -> Self {
        Self {
            min,
            max: Point::new(min.x + width, min.y + height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

/// Fixed visual constants shared by rendering and hit testing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NodeMetrics {
    /// Node width in pixels.
    pub node_width: f32,
    /// Header height in pixels.
    pub header_height: f32,
    /// Padding above the first and below the last pin row.
    pub body_padding: f32,
    /// Pin row height in pixels.
    pub pin_row_height: f32,
    /// Vertical gap between pin rows.
    pub pin_row_gap: f32,
    /// Horizontal distance of a pin center from its node edge.
    pub pin_inset: f32,
    /// Pin circle radius.
    pub pin_radius: f32,
    /// Edge length of the square delete control in the header.
    pub delete_control_size: f32,
}

impl Default for NodeMetrics {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            header_height: 28.0,
            body_padding: 8.0,
            pin_row_height: 20.0,
            pin_row_gap: 6.0,
            pin_inset: 12.0,
            pin_radius: 5.0,
            delete_control_size: 14.0,
        }
    }
}

impl NodeMetrics {
    /// Absolute center of a pin glyph.
    ///
    /// Inputs sit `pin_inset` right of the left edge, outputs `pin_inset` left
    /// of the right edge. Row `i` is centered at
    /// `y + header + padding + i * (row + gap) + row / 2`.
    pub fn pin_position(&self, origin: Point, index: usize, direction: PinDirection) -> Point {
        let x = match direction {
            PinDirection::Input => origin.x + self.pin_inset,
            PinDirection::Output => origin.x + self.node_width - self.pin_inset,
        };
        let y = origin.y
            + self.header_height
            + self.body_padding
            + index as f32 * (self.pin_row_height + self.pin_row_gap)
            + self.pin_row_height / 2.0;
        Point::new(x, y)
    }

    /// Height of a node body holding `rows` pin rows (plus the header).
    pub fn node_height(&self, rows: usize) -> f32 {
        let rows_h = if rows == 0 {
            0.0
        } else {
            rows as f32 * self.pin_row_height + (rows - 1) as f32 * self.pin_row_gap
        };
        self.header_height + self.body_padding * 2.0 + rows_h
    }

    /// Bounding rectangle of a node holding `rows` pin rows.
    pub fn node_rect(&self, origin: Point, rows: usize) -> Rect {
        Rect::from_min_size(origin, self.node_width, self.node_height(rows))
    }

    pub fn header_rect(&self, origin: Point) -> Rect {
        Rect::from_min_size(origin, self.node_width, self.header_height)
    }

    /// Square delete control, vertically centered at the right end of the header.
    pub fn delete_control_rect(&self, origin: Point) -> Rect {
        let size = self.delete_control_size;
        let margin = (self.header_height - size) / 2.0;
        Rect::from_min_size(
            Point::new(origin.x + self.node_width - margin - size, origin.y + margin),
            size,
            size,
        )
    }
}

/// Cubic bezier segment described by its four control points.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl CubicBezier {
    pub fn point_at(&self, t: f32) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.start.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.end.x,
            a * self.start.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.end.y,
        )
    }

    /// Polyline approximation with `segments + 1` points, endpoints exact.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let mut points = Vec::with_capacity(segments + 1);
        points.push(self.start);
        for i in 1..segments {
            points.push(self.point_at(i as f32 / segments as f32));
        }
        points.push(self.end);
        points
    }
}

/// Horizontal-tangent S-curve between two points.
///
/// Control points are pushed half the horizontal distance away from each end:
/// `ctrl1 = (x1 + d/2, y1)`, `ctrl2 = (x2 - d/2, y2)` with `d = |x2 - x1|`.
pub fn bezier_path(from: Point, to: Point) -> CubicBezier {
    let half = (to.x - from.x).abs() * 0.5;
    CubicBezier {
        start: from,
        ctrl1: Point::new(from.x + half, from.y),
        ctrl2: Point::new(to.x - half, to.y),
        end: to,
    }
}
