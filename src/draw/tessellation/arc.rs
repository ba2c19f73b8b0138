//! Arc and circle tessellation
//!
//! Arcs are emitted with a fixed angular step taken from the full-circle
//! resolution, never by dividing the requested span evenly. Two arcs built
//! with the same `Resolution` therefore have identical facet angles.

use crate::draw::geometry::{Point, Polygon, Resolution};

/// Longest span tessellated; anything past one turn would retrace the same vertices
pub const MAX_ARC_SPAN_DEG: f64 = 360.0;

/// Number of vertices emitted for an arc spanning `span_deg` degrees:
/// `floor(segments * span / 360) + 1`, with the span clamped to
/// [`MAX_ARC_SPAN_DEG`] (so +∞ is a full circle). Negative and NaN spans
/// emit nothing.
pub fn arc_vertex_count(span_deg: f64, resolution: Resolution) -> usize {
    if span_deg.is_nan() || span_deg < 0.0 {
        return 0;
    }
    let span = span_deg.min(MAX_ARC_SPAN_DEG);
    let steps = (resolution.segments() as f64 * span / 360.0).floor();
    steps as usize + 1
}

/// Tessellate an arc of the circle with the given center and diameter
///
/// Vertex `k` lies at `start_angle_deg` plus `k` sectors, counter-clockwise.
/// The polygon is open: a full 360° arc ends on (a floating-point copy of)
/// its first vertex but nothing else closes it. Spans beyond 360° produce
/// the full circle.
pub fn tessellate_arc(
    center: Point,
    diameter: f64,
    start_angle_deg: f64,
    span_deg: f64,
    resolution: Resolution,
) -> Polygon {
    let count = arc_vertex_count(span_deg, resolution);
    let radius = diameter / 2.0;
    let start = start_angle_deg.to_radians();
    let sector = resolution.sector();

    let mut arc = Polygon::with_capacity(count);
    for k in 0..count {
        arc.push(Point::polar(center, radius, start + k as f64 * sector));
    }
    arc
}

/// Full circle, starting at 0° (`segments + 1` vertices)
pub fn tessellate_circle(center: Point, diameter: f64, resolution: Resolution) -> Polygon {
    tessellate_arc(center, diameter, 0.0, 360.0, resolution)
}
