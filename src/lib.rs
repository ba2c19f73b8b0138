//! Polygon outlines for photoplotter apertures
//!
//! Converts circular, oblong and rectangular aperture definitions into point
//! rings for a downstream polygon clipper or renderer. Arcs are tessellated
//! with a fixed angular step set by [`Resolution`]; round-tool strokes are
//! built as four-piece capsule outlines.
//!
//! # Example
//! ```
//! use aperture_geometry::{Aperture, Point, Resolution};
//!
//! let pad = Aperture::oblong(11, 10.0, 4.0);
//! let outline = pad.flash_at(Point::new(25.0, 12.5), Resolution::default());
//! let bounds = outline.bounds().unwrap();
//! assert!((bounds.width() - 10.0).abs() < 1e-9);
//! ```

pub mod draw;

pub use draw::aperture::{
    flash,
    flash_many,
    Aperture,
    ApertureKind,
    ApertureShape,
    ApertureTable,
    FlashedPad,
    Placement,
};
pub use draw::geometry::{Bounds, Point, Polygon, Resolution, Winding, DEFAULT_SEGMENTS};
pub use draw::tessellation::{
    arc_vertex_count,
    build_stroke,
    tessellate_arc,
    tessellate_circle,
    MAX_ARC_SPAN_DEG,
};
