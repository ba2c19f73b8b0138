//! Round-tool stroke outline
//!
//! A circular tool swept from `start` to `end` leaves a capsule (stadium)
//! shape. The outline is built from four pieces, emitted in order so the
//! boundary is traversed counter-clockwise without reversing:
//!
//! ```text
//!      ___c___
//!     /       \
//!   d(  s-->e  )b
//!     \_______/
//!         a
//! ```
//!
//! - `a`: straight edge offset by `r` at `θ − 90°`, from start to end
//! - `b`: half circle around `end` starting at `θ − 90°`
//! - `c`: straight edge offset by `r` at `θ + 90°`, from end back to start
//! - `d`: half circle around `start` starting at `θ + 90°`

use crate::draw::geometry::{Point, Polygon, Resolution};
use super::arc::{arc_vertex_count, tessellate_arc};
use std::f64::consts::{FRAC_PI_2, PI};

/// Build the capsule outline traced by a tool of `tool_diameter` moving from
/// `start` to `end`
///
/// Coincident endpoints are not special-cased: the direction defaults to 0
/// (`atan2(0, 0)`), both edges collapse to single points and the two caps
/// together approximate a full circle around `start`.
pub fn build_stroke(start: Point, end: Point, tool_diameter: f64, resolution: Resolution) -> Polygon {
    let r = tool_diameter / 2.0;
    let direction = (end.y - start.y).atan2(end.x - start.x);

    let side_a = direction - FRAC_PI_2;
    let side_c = side_a + PI;
    let cap_b_deg = side_a.to_degrees();
    let cap_d_deg = cap_b_deg + 180.0;

    let mut outline = Polygon::with_capacity(4 + 2 * arc_vertex_count(180.0, resolution));

    // a
    outline.push(Point::polar(start, r, side_a));
    outline.push(Point::polar(end, r, side_a));
    // b
    outline.extend(tessellate_arc(end, tool_diameter, cap_b_deg, 180.0, resolution));
    // c
    outline.push(Point::polar(end, r, side_c));
    outline.push(Point::polar(start, r, side_c));
    // d
    outline.extend(tessellate_arc(start, tool_diameter, cap_d_deg, 180.0, resolution));

    outline
}
