//! Aperture definitions and flash dispatch
//!
//! An aperture is an immutable shape definition tagged with its D-code.
//! Flashing places the shape, unrotated, at a center point and returns its
//! outline. Every flash is a pure function of the shape, the center and the
//! resolution.

use serde::{Deserialize, Serialize};
use crate::draw::geometry::{Point, Polygon, Resolution};
use crate::draw::tessellation::{build_stroke, tessellate_circle};

/// Shape of an aperture (standard Gerber templates C, O and R)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ApertureShape {
    Circular { diameter: f64 },
    Oblong { width: f64, height: f64 },
    Rectangular { width: f64, height: f64 },
}

/// Kind of aperture without its dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApertureKind {
    Circular,
    Oblong,
    Rectangular,
}

impl ApertureKind {
    /// Gerber template letter
    pub fn letter(&self) -> char {
        match self {
            ApertureKind::Circular => 'C',
            ApertureKind::Oblong => 'O',
            ApertureKind::Rectangular => 'R',
        }
    }
}

impl ApertureShape {
    pub fn kind(&self) -> ApertureKind {
        match self {
            ApertureShape::Circular { .. } => ApertureKind::Circular,
            ApertureShape::Oblong { .. } => ApertureKind::Oblong,
            ApertureShape::Rectangular { .. } => ApertureKind::Rectangular,
        }
    }
}

/// Outline of `shape` flashed at `center`
pub fn flash(shape: &ApertureShape, center: Point, resolution: Resolution) -> Polygon {
    match *shape {
        ApertureShape::Circular { diameter } => tessellate_circle(center, diameter, resolution),
        ApertureShape::Oblong { width, height } => flash_oblong(center, width, height, resolution),
        ApertureShape::Rectangular { width, height } => flash_rectangle(center, width, height),
    }
}

/// Oblong = stroke of a round tool (diameter = short side) along the long axis.
/// Equal sides take the vertical branch and collapse to a circle.
fn flash_oblong(center: Point, width: f64, height: f64, resolution: Resolution) -> Polygon {
    let (p1, p2, tool) = if width > height {
        let r = height / 2.0;
        (
            center.offset(-width / 2.0 + r, 0.0),
            center.offset(width / 2.0 - r, 0.0),
            height,
        )
    } else {
        let r = width / 2.0;
        (
            center.offset(0.0, -height / 2.0 + r),
            center.offset(0.0, height / 2.0 - r),
            width,
        )
    };
    build_stroke(p1, p2, tool, resolution)
}

/// Counter-clockwise from the top-right corner, explicitly closed
fn flash_rectangle(center: Point, width: f64, height: f64) -> Polygon {
    let hw = width / 2.0;
    let hh = height / 2.0;
    Polygon::from(vec![
        center.offset(hw, hh),
        center.offset(-hw, hh),
        center.offset(-hw, -hh),
        center.offset(hw, -hh),
        center.offset(hw, hh),
    ])
}

/// An aperture definition: D-code, shape and placement center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aperture {
    pub code: i32,
    #[serde(flatten)]
    pub shape: ApertureShape,
    #[serde(default)]
    pub center: Point,
}

impl Aperture {
    /// Aperture with the given shape at the origin
    pub fn new(code: i32, shape: ApertureShape) -> Self {
        Self {
            code,
            shape,
            center: Point::ORIGIN,
        }
    }

    pub fn circular(code: i32, diameter: f64) -> Self {
        Self::new(code, ApertureShape::Circular { diameter })
    }

    pub fn oblong(code: i32, width: f64, height: f64) -> Self {
        Self::new(code, ApertureShape::Oblong { width, height })
    }

    pub fn rectangular(code: i32, width: f64, height: f64) -> Self {
        Self::new(code, ApertureShape::Rectangular { width, height })
    }

    /// Rectangular aperture with equal sides
    pub fn square(code: i32, side: f64) -> Self {
        Self::rectangular(code, side, side)
    }

    /// Same aperture moved to `center`
    pub fn at(self, center: Point) -> Self {
        Self { center, ..self }
    }

    pub fn kind(&self) -> ApertureKind {
        self.shape.kind()
    }

    /// Outline at the stored center
    pub fn flash(&self, resolution: Resolution) -> Polygon {
        flash(&self.shape, self.center, resolution)
    }

    /// Outline at `center`; the stored center is left untouched
    pub fn flash_at(&self, center: Point, resolution: Resolution) -> Polygon {
        flash(&self.shape, center, resolution)
    }

    /// Trace drawn by sweeping this aperture from `start` to `end`.
    /// Only circular apertures can stroke; other shapes return `None`.
    pub fn stroke(&self, start: Point, end: Point, resolution: Resolution) -> Option<Polygon> {
        match self.shape {
            ApertureShape::Circular { diameter } => Some(build_stroke(start, end, diameter, resolution)),
            _ => None,
        }
    }
}
