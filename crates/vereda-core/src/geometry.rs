//! # Pool Geometry
//!
//! The rectangle the sidewalk wraps around, and the mapping from compass
//! sides to the run length each side's tiles must span.
//!
//! ```text
//!                      NORTH  (run = length)
//!              ┌───────────────────────────────┐
//!              │                               │
//!   WEST       │                               │   EAST
//!   (run =     │             POOL              │   (run =
//!    width)    │                               │    width)
//!              │                               │
//!              └───────────────────────────────┘
//!                      SOUTH  (run = length)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Side
// =============================================================================

/// One of the four compass sides of a rectangular pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// All sides in ledger order.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Returns the lowercase side name used in keys and messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }

    /// North and south run along the pool's length.
    pub const fn runs_along_length(&self) -> bool {
        matches!(self, Side::North | Side::South)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Pool Geometry
// =============================================================================

/// A rectangular pool, in meters.
///
/// The perimeter is always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PoolGeometry {
    /// North–south run (m).
    pub length: f64,
    /// East–west run (m).
    pub width: f64,
}

impl PoolGeometry {
    /// Creates a pool from its length and width in meters.
    pub const fn new(length: f64, width: f64) -> Self {
        PoolGeometry { length, width }
    }

    /// Run length a side's tiles must span.
    ///
    /// North/South → `length`, East/West → `width`. Every side always has one.
    pub fn run_length(&self, side: Side) -> f64 {
        if side.runs_along_length() {
            self.length
        } else {
            self.width
        }
    }

    /// `2 · (length + width)`.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }

    /// Floor area of the pool (m²), used by the bed calculator.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Perimeter extended by the additional rows, for lineal-meter materials.
    ///
    /// Each row on north/south adds `2 · length`, each row on east/west adds
    /// `2 · width`.
    pub fn perimeter_with_rows(&self, north: u32, south: u32, east: u32, west: u32) -> f64 {
        self.perimeter()
            + (f64::from(north) + f64::from(south)) * self.length * 2.0
            + (f64::from(east) + f64::from(west)) * self.width * 2.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length_by_side() {
        let pool = PoolGeometry::new(8.0, 4.0);
        assert_eq!(pool.run_length(Side::North), 8.0);
        assert_eq!(pool.run_length(Side::South), 8.0);
        assert_eq!(pool.run_length(Side::East), 4.0);
        assert_eq!(pool.run_length(Side::West), 4.0);
    }

    #[test]
    fn test_perimeter_and_area() {
        let pool = PoolGeometry::new(2.5, 5.0);
        assert_eq!(pool.perimeter(), 15.0);
        assert_eq!(pool.area(), 12.5);
    }

    #[test]
    fn test_perimeter_with_rows() {
        let pool = PoolGeometry::new(2.5, 5.0);
        assert_eq!(pool.perimeter_with_rows(0, 0, 0, 0), 15.0);
        // one north row: + 2.5 × 2, one east row: + 5 × 2
        assert_eq!(pool.perimeter_with_rows(1, 0, 1, 0), 30.0);
    }

    #[test]
    fn test_perimeter_with_rows_beyond_u32_sum() {
        let pool = PoolGeometry::new(1.0, 1.0);
        let rows = 3_000_000_000;
        let expected = 4.0 + 2.0 * f64::from(rows) * 2.0 + 2.0 * f64::from(rows) * 2.0;
        assert_eq!(pool.perimeter_with_rows(rows, rows, rows, rows), expected);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::West.to_string(), "west");
        assert_eq!(serde_json::to_string(&Side::East).unwrap(), "\"east\"");
    }
}
