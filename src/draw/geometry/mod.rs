//! Geometry module for aperture outlines
//!
//! # Submodules
//! - `types` - Core geometric primitives (Point, Polygon, Bounds, Winding)
//! - `resolution` - Circle tessellation resolution setting

mod types;
mod resolution;

pub use types::{
    Point,
    Polygon,
    Bounds,
    Winding,
};

pub use resolution::{
    DEFAULT_SEGMENTS,
    Resolution,
};
