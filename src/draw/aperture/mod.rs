//! Aperture module
//!
//! # Submodules
//! - `shapes` - Aperture definitions and the `flash` dispatch
//! - `table` - D-code keyed aperture table and parallel batch flashing

mod shapes;
mod table;

pub use shapes::{
    flash,
    Aperture,
    ApertureKind,
    ApertureShape,
};

pub use table::{
    flash_many,
    ApertureTable,
    FlashedPad,
    Placement,
};
