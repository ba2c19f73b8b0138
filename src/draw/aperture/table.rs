//! Aperture table and batch flashing
//!
//! Board data defines each pad shape once (by D-code) and flashes it at many
//! placements. The table keeps definitions in insertion order and flashes
//! placements in parallel; output order always follows input order.

use indexmap::IndexMap;
use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::draw::geometry::{Point, Polygon, Resolution};
use super::shapes::{flash, Aperture, ApertureShape};

/// One flash instance: which aperture, and where
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub code: i32,
    pub center: Point,
}

impl Placement {
    pub fn new(code: i32, center: Point) -> Self {
        Self { code, center }
    }
}

/// Outline produced for one placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashedPad {
    pub code: i32,
    pub polygon: Polygon,
}

/// Aperture definitions keyed by D-code
///
/// This is a plain map: inserting a code twice replaces the earlier
/// definition. Callers that need uniqueness must check before inserting.
///
/// Serialized as a list of apertures. Keys are always rebuilt from each
/// aperture's own `code` on load, so a key can never disagree with the
/// definition it points at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Aperture>", into = "Vec<Aperture>")]
pub struct ApertureTable {
    apertures: IndexMap<i32, Aperture>,
}

impl ApertureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, returning the one it replaced
    pub fn insert(&mut self, aperture: Aperture) -> Option<Aperture> {
        self.apertures.insert(aperture.code, aperture)
    }

    pub fn get(&self, code: i32) -> Option<&Aperture> {
        self.apertures.get(&code)
    }

    pub fn len(&self) -> usize {
        self.apertures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apertures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aperture> {
        self.apertures.values()
    }

    /// Flash every placement, in parallel, preserving placement order.
    /// Placements naming a code missing from the table are skipped.
    pub fn flash_placements(&self, placements: &[Placement], resolution: Resolution) -> Vec<FlashedPad> {
        if placements.is_empty() {
            return Vec::new();
        }

        let mut missing: HashMap<i32, usize> = HashMap::new();
        for placement in placements {
            if !self.apertures.contains_key(&placement.code) {
                *missing.entry(placement.code).or_default() += 1;
            }
        }
        for (code, count) in &missing {
            warn!("Aperture D{} not found in table; {} placements skipped", code, count);
        }

        let pads: Vec<FlashedPad> = placements
            .par_iter()
            .filter_map(|placement| {
                let aperture = self.apertures.get(&placement.code)?;
                let polygon = aperture.flash_at(placement.center, resolution);
                trace!(
                    "D{} flashed at ({}, {}): {} points",
                    placement.code,
                    placement.center.x,
                    placement.center.y,
                    polygon.len()
                );
                Some(FlashedPad {
                    code: placement.code,
                    polygon,
                })
            })
            .collect();

        debug!(
            "Flashed {} of {} placements ({} apertures, {})",
            pads.len(),
            placements.len(),
            self.apertures.len(),
            resolution
        );

        pads
    }
}

impl FromIterator<Aperture> for ApertureTable {
    fn from_iter<I: IntoIterator<Item = Aperture>>(iter: I) -> Self {
        let mut table = ApertureTable::new();
        for aperture in iter {
            table.insert(aperture);
        }
        table
    }
}

impl From<Vec<Aperture>> for ApertureTable {
    fn from(apertures: Vec<Aperture>) -> Self {
        apertures.into_iter().collect()
    }
}

impl From<ApertureTable> for Vec<Aperture> {
    fn from(table: ApertureTable) -> Self {
        table.apertures.into_values().collect()
    }
}

/// Flash one shape at many centers, in parallel, preserving order
pub fn flash_many(shape: &ApertureShape, centers: &[Point], resolution: Resolution) -> Vec<Polygon> {
    centers
        .par_iter()
        .map(|&center| flash(shape, center, resolution))
        .collect()
}
