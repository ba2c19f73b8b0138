//! Circle tessellation resolution
//!
//! `Resolution` is the number of straight segments used to approximate a full
//! 360° circle. Partial arcs reuse the same angular step, so every arc built
//! with one `Resolution` has the same vertex density.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Segment count used when nothing else is configured
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Number of segments per full circle (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Resolution {
    segments: u32,
}

impl Resolution {
    /// Create a resolution, rejecting zero segments
    pub fn new(segments: u32) -> anyhow::Result<Self> {
        anyhow::ensure!(
            segments > 0,
            "circle resolution must be at least 1 segment, got {}",
            segments
        );
        Ok(Self { segments })
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Angular step between consecutive vertices, in radians
    pub fn sector(&self) -> f64 {
        2.0 * PI / self.segments as f64
    }

    /// Relative perimeter error of the inscribed polygon: (π − n·sin(π/n)) / π
    pub fn relative_error(&self) -> f64 {
        let n = self.segments as f64;
        (PI - n * (PI / n).sin()) / PI
    }

    /// Largest distance between the ideal circle of `radius` and its
    /// tessellation (the sagitta of one segment)
    pub fn max_deviation(&self, radius: f64) -> f64 {
        radius.abs() * (1.0 - (PI / self.segments as f64).cos())
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl TryFrom<u32> for Resolution {
    type Error = anyhow::Error;

    fn try_from(segments: u32) -> Result<Self, Self::Error> {
        Resolution::new(segments)
    }
}

impl From<Resolution> for u32 {
    fn from(resolution: Resolution) -> Self {
        resolution.segments
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} segments", self.segments)
    }
}
