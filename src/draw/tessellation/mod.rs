//! Tessellation module for aperture geometry
//!
//! Converts curved aperture geometry into point rings.
//!
//! # Submodules
//! - `arc` - Arc and full-circle tessellation at a fixed angular step
//! - `stroke` - Capsule outline of a round tool swept along a segment

mod arc;
mod stroke;

pub use arc::{
    arc_vertex_count,
    MAX_ARC_SPAN_DEG,
    tessellate_arc,
    tessellate_circle,
};

pub use stroke::build_stroke;
