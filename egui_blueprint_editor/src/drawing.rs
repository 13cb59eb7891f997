//! Drawing utilities for the node editor.

use blueprint_graph::{CubicBezier, Point};
use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};

/// Surface coordinates to screen coordinates.
pub fn to_screen(origin: Pos2, p: Point) -> Pos2 {
    origin + Vec2::new(p.x, p.y)
}

/// Screen coordinates to surface coordinates.
pub fn to_surface(origin: Pos2, pos: Pos2) -> Point {
    let local = pos - origin;
    Point::new(local.x, local.y)
}

pub fn to_screen_rect(origin: Pos2, rect: blueprint_graph::Rect) -> Rect {
    Rect::from_min_max(to_screen(origin, rect.min), to_screen(origin, rect.max))
}

/// Draw a background grid.
pub fn draw_grid(painter: &egui::Painter, rect: Rect, color: Color32, spacing: f32) {
    let stroke = Stroke::new(1.0, color);

    let mut x = rect.min.x;
    while x < rect.max.x {
        painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
        x += spacing;
    }

    let mut y = rect.min.y;
    while y < rect.max.y {
        painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
        y += spacing;
    }
}

/// Draw a connection curve computed by the surface.
pub fn draw_bezier_connection(
    painter: &egui::Painter,
    origin: Pos2,
    curve: &CubicBezier,
    segments: usize,
    stroke: Stroke,
) {
    let points: Vec<Pos2> = curve
        .flatten(segments)
        .into_iter()
        .map(|p| to_screen(origin, p))
        .collect();
    painter.add(Shape::line(points, stroke));
}
