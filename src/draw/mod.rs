//! Aperture geometry construction
//!
//! # Module Structure
//! - `geometry` - Points, polygons and the tessellation resolution
//! - `tessellation` - Arc, circle and stroke outlines
//! - `aperture` - Aperture definitions, flash dispatch and aperture tables

pub mod aperture;
pub mod geometry;
pub mod tessellation;
