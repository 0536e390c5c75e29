//! # Domain Types
//!
//! Inputs and output lines of the estimator.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUTS                                 OUTPUTS                         │
//! │  ┌─────────────────────┐               ┌─────────────────────┐         │
//! │  │ TileConfiguration   │               │ TileQuantityLine    │         │
//! │  │  north/south/east/  │               │  tile_id (key)      │         │
//! │  │  west: SideConfig   │               │  kind: first_ring / │         │
//! │  │   first_ring_type   │               │   additional_rows / │         │
//! │  │   rows              │               │   corner            │         │
//! │  │   selected_tile_id  │               │  quantity           │         │
//! │  └─────────────────────┘               └─────────────────────┘         │
//! │  ┌─────────────────────┐               ┌─────────────────────┐         │
//! │  │ TileCatalogEntry    │               │ MaterialQuantityLine│         │
//! │  │ MaterialPriceEntry  │               │  quantity/unit/cost │         │
//! │  └─────────────────────┘               └─────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::geometry::Side;
use crate::money::Money;
use crate::TILE_UNIT;

// =============================================================================
// First Ring Type
// =============================================================================

/// Finish tile laid directly against the pool edge.
///
/// The variants differ only in a constant width and a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FirstRingType {
    /// Whale's back profile, 50cm. Needs dedicated corner pieces.
    LomoBallena,
    /// L-shaped finish, 40cm.
    LFinish,
    /// Plain perimeter finish, 40cm.
    Perimeter,
}

impl FirstRingType {
    /// Wire code, also used in ledger keys (`firstRing_<CODE>`).
    pub const fn code(&self) -> &'static str {
        match self {
            FirstRingType::LomoBallena => "LOMO_BALLENA",
            FirstRingType::LFinish => "L_FINISH",
            FirstRingType::Perimeter => "PERIMETER",
        }
    }

    /// Physical tile width in meters, measured outward from the pool edge.
    pub const fn tile_width_m(&self) -> f64 {
        match self {
            FirstRingType::LomoBallena => 0.50,
            FirstRingType::LFinish => 0.40,
            FirstRingType::Perimeter => 0.40,
        }
    }

    /// Whether this finish needs a corner piece at each pool corner.
    pub const fn needs_corner_pieces(&self) -> bool {
        matches!(self, FirstRingType::LomoBallena)
    }

    /// Ledger key of the first-ring line for this finish.
    pub fn ring_key(&self) -> String {
        format!("firstRing_{}", self.code())
    }

    /// Ledger key of the corner line for this finish.
    pub fn corner_key(&self) -> String {
        format!("corner_{}", self.code())
    }

    /// Display name of the first-ring line, e.g. `Primer Anillo LOMO BALLENA (50x50cm)`.
    pub fn ring_display_name(&self) -> String {
        format!(
            "Primer Anillo {} ({}x50cm)",
            self.code().replace('_', " "),
            format_decimal(self.tile_width_m() * 100.0)
        )
    }
}

impl fmt::Display for FirstRingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats a measure to at most two decimals, without a trailing `.0`.
pub(crate) fn format_decimal(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{}", rounded)
    }
}

// =============================================================================
// Side Configuration
// =============================================================================

/// Tiling configuration for one side of the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SideConfiguration {
    /// Finish used for the ring against the pool edge, if any.
    #[serde(default)]
    pub first_ring_type: Option<FirstRingType>,

    /// Additional straight rows of common tile beyond the first ring.
    #[serde(default)]
    pub rows: u32,

    /// Catalog tile used for the additional rows. Required when `rows > 0`.
    #[serde(default)]
    pub selected_tile_id: Option<String>,
}

impl SideConfiguration {
    /// A side with only a first ring.
    pub fn ring(first_ring_type: FirstRingType) -> Self {
        SideConfiguration {
            first_ring_type: Some(first_ring_type),
            rows: 0,
            selected_tile_id: None,
        }
    }

    /// Adds `rows` additional rows of the given catalog tile.
    pub fn with_rows(mut self, rows: u32, tile_id: impl Into<String>) -> Self {
        self.rows = rows;
        self.selected_tile_id = Some(tile_id.into());
        self
    }

    /// Selected tile id, treating an empty string as unset.
    pub fn tile_id(&self) -> Option<&str> {
        self.selected_tile_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// The four per-side configurations of a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TileConfiguration {
    #[serde(default)]
    pub north: SideConfiguration,
    #[serde(default)]
    pub south: SideConfiguration,
    #[serde(default)]
    pub east: SideConfiguration,
    #[serde(default)]
    pub west: SideConfiguration,
}

impl TileConfiguration {
    /// Same configuration on all four sides.
    pub fn uniform(side: SideConfiguration) -> Self {
        TileConfiguration {
            north: side.clone(),
            south: side.clone(),
            east: side.clone(),
            west: side,
        }
    }

    /// Configuration of one side.
    pub fn side(&self, side: Side) -> &SideConfiguration {
        match side {
            Side::North => &self.north,
            Side::South => &self.south,
            Side::East => &self.east,
            Side::West => &self.west,
        }
    }

    /// Mutable configuration of one side.
    pub fn side_mut(&mut self, side: Side) -> &mut SideConfiguration {
        match side {
            Side::North => &mut self.north,
            Side::South => &mut self.south,
            Side::East => &mut self.east,
            Side::West => &mut self.west,
        }
    }

    /// Sides paired with their configuration, in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &SideConfiguration)> {
        Side::ALL.into_iter().map(move |side| (side, self.side(side)))
    }
}

// =============================================================================
// Reference Data
// =============================================================================

/// A common tile from the catalog. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TileCatalogEntry {
    pub id: String,
    pub name: String,
    /// Width in centimeters (the row's depth away from the pool).
    pub width_cm: f64,
    /// Length in centimeters (laid end-to-end along the side).
    pub length_cm: f64,
    /// Price per tile in cents.
    #[serde(default)]
    pub price_per_unit_cents: i64,
}

impl TileCatalogEntry {
    /// Width in meters.
    #[inline]
    pub fn width_m(&self) -> f64 {
        self.width_cm / 100.0
    }

    /// Length in meters.
    #[inline]
    pub fn length_m(&self) -> f64 {
        self.length_cm / 100.0
    }

    /// Whether both dimensions are usable for counting.
    pub fn has_valid_dimensions(&self) -> bool {
        self.width_cm > 0.0 && self.length_cm > 0.0
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_per_unit_cents)
    }

    /// Display name with dimensions, e.g. `Loseta Atérmica (50x50cm)`.
    pub fn display_name(&self) -> String {
        format!(
            "{} ({}x{}cm)",
            self.name,
            format_decimal(self.width_cm),
            format_decimal(self.length_cm)
        )
    }
}

/// A priced construction material.
///
/// `material_type` is free text in seed data (`CEMENT`, `SAND`, `STONE`, ...),
/// which is why lookups are lenient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPriceEntry {
    #[serde(rename = "type")]
    pub material_type: String,
    #[serde(default)]
    pub name: String,
    /// Price per unit (bag, m³, kg, m²) in cents.
    pub price_per_unit_cents: i64,
    #[serde(default)]
    pub unit: String,
    /// Packaged weight in kg for bagged materials.
    #[serde(default)]
    pub bag_weight: Option<f64>,
}

impl MaterialPriceEntry {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_per_unit_cents)
    }
}

// =============================================================================
// Output Lines
// =============================================================================

/// Which part of the layout a tile line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TileLineKind {
    FirstRing,
    AdditionalRows,
    Corner,
}

/// A tile line of the estimate.
///
/// Lines are keyed by `tile_id` (a catalog id, or `firstRing_<TYPE>` /
/// `corner_<TYPE>`); repeated contributions accumulate into one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TileQuantityLine {
    pub tile_id: String,
    pub tile_name: String,
    #[serde(rename = "type")]
    pub kind: TileLineKind,
    pub quantity: i64,
    pub unit: String,
}

impl TileQuantityLine {
    /// An empty line ready to accumulate into.
    pub fn new(tile_id: impl Into<String>, tile_name: impl Into<String>, kind: TileLineKind) -> Self {
        TileQuantityLine {
            tile_id: tile_id.into(),
            tile_name: tile_name.into(),
            kind,
            quantity: 0,
            unit: TILE_UNIT.to_string(),
        }
    }
}

/// A material line: quantity in `unit`, priced from the rounded quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaterialQuantityLine {
    pub quantity: f64,
    pub unit: String,
    pub cost: Money,
}

impl MaterialQuantityLine {
    pub fn new(quantity: f64, unit: impl Into<String>, cost: Money) -> Self {
        MaterialQuantityLine {
            quantity,
            unit: unit.into(),
            cost,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_table() {
        assert_eq!(FirstRingType::LomoBallena.tile_width_m(), 0.50);
        assert_eq!(FirstRingType::LFinish.tile_width_m(), 0.40);
        assert_eq!(FirstRingType::Perimeter.tile_width_m(), 0.40);
        assert!(FirstRingType::LomoBallena.needs_corner_pieces());
        assert!(!FirstRingType::LFinish.needs_corner_pieces());
        assert!(!FirstRingType::Perimeter.needs_corner_pieces());
    }

    #[test]
    fn test_finish_keys_and_names() {
        let lomo = FirstRingType::LomoBallena;
        assert_eq!(lomo.ring_key(), "firstRing_LOMO_BALLENA");
        assert_eq!(lomo.corner_key(), "corner_LOMO_BALLENA");
        assert_eq!(lomo.ring_display_name(), "Primer Anillo LOMO BALLENA (50x50cm)");
        assert_eq!(
            FirstRingType::LFinish.ring_display_name(),
            "Primer Anillo L FINISH (40x50cm)"
        );
    }

    #[test]
    fn test_first_ring_type_wire_format() {
        let json = serde_json::to_string(&FirstRingType::LomoBallena).unwrap();
        assert_eq!(json, "\"LOMO_BALLENA\"");
        let parsed: FirstRingType = serde_json::from_str("\"L_FINISH\"").unwrap();
        assert_eq!(parsed, FirstRingType::LFinish);
    }

    #[test]
    fn test_side_configuration_from_caller_json() {
        let json = r#"{ "firstRingType": null, "rows": 2, "selectedTileId": "tile-1" }"#;
        let side: SideConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(side.first_ring_type, None);
        assert_eq!(side.rows, 2);
        assert_eq!(side.tile_id(), Some("tile-1"));

        let side: SideConfiguration = serde_json::from_str(r#"{ "selectedTileId": "  " }"#).unwrap();
        assert_eq!(side.tile_id(), None);
    }

    #[test]
    fn test_catalog_entry_conversions() {
        let tile = TileCatalogEntry {
            id: "t".to_string(),
            name: "Loseta".to_string(),
            width_cm: 40.0,
            length_cm: 60.5,
            price_per_unit_cents: 150000,
        };
        assert_eq!(tile.width_m(), 0.4);
        assert_eq!(tile.length_m(), 0.605);
        assert!(tile.has_valid_dimensions());
        assert_eq!(tile.display_name(), "Loseta (40x60.5cm)");
        assert_eq!(tile.price().cents(), 150000);
    }

    #[test]
    fn test_tile_line_wire_format() {
        let line = TileQuantityLine::new("corner_LOMO_BALLENA", "Esquinero", TileLineKind::Corner);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["type"], "corner");
        assert_eq!(json["tileId"], "corner_LOMO_BALLENA");
        assert_eq!(json["unit"], "unidades");
        assert_eq!(json["quantity"], 0);
    }
}
