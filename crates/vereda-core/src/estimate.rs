//! # Tiling Estimate
//!
//! The entry point: one pool, four side configurations, reference data in;
//! tile ledger and sidewalk material ledger out.
//!
//! ## Estimate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        estimate_tiling()                                │
//! │                                                                         │
//! │  PoolGeometry ──► run length per side                                  │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  TileConfiguration ──► rings::layout_tiles ──► TileLedger + sides      │
//! │  TileCatalog ──────────┘        │                                       │
//! │                                 │ Σ side areas                          │
//! │                                 ▼                                       │
//! │  Settings + PriceTable ──► materials ──► SidewalkMaterials + total     │
//! │                                                                         │
//! │  Result: TilingEstimate (never an error)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bed calculator runs separately; [`ProjectMaterials::combine`] merges
//! the two for a project total.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use ts_rs::TS;

use crate::bed::{calculate_bed_materials, BedEstimate};
use crate::error::{CoreError, CoreResult};
use crate::geometry::PoolGeometry;
use crate::materials::{calculate_sidewalk_materials, SidewalkMaterials};
use crate::money::Money;
use crate::pricing::PriceTable;
use crate::rings::{layout_tiles, SideContribution};
use crate::settings::{BedSettings, CalculationSettings};
use crate::types::{
    MaterialPriceEntry, MaterialQuantityLine, TileCatalogEntry, TileConfiguration,
    TileQuantityLine,
};
use crate::validation::{
    inspect_configuration, validate_bed_settings, validate_pool_geometry, validate_settings,
    validate_tile_configuration, ConfigurationWarning,
};

// =============================================================================
// Tiling Estimate
// =============================================================================

/// Everything the sidewalk needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TilingEstimate {
    /// Sum of every side's ring and row areas (m²).
    pub sidewalk_area_m2: f64,
    pub perimeter_m: f64,
    /// Perimeter extended by the additional rows (m).
    pub perimeter_with_rows_m: f64,
    /// Per-side breakdown, north, south, east, west.
    pub sides: Vec<SideContribution>,
    pub tiles: Vec<TileQuantityLine>,
    pub materials: SidewalkMaterials,
    /// Billable material cost. Tiles are not included.
    pub total_material_cost: Money,
}

impl TilingEstimate {
    /// Quantity of the tile line under `tile_id`, if present.
    pub fn tile_quantity(&self, tile_id: &str) -> Option<i64> {
        self.tiles
            .iter()
            .find(|line| line.tile_id == tile_id)
            .map(|line| line.quantity)
    }

    /// Total tile units across all lines.
    pub fn total_tiles(&self) -> i64 {
        self.tiles
            .iter()
            .fold(0, |total: i64, line| total.saturating_add(line.quantity))
    }
}

/// Estimates tiles and sidewalk materials for a pool.
///
/// Never fails. A side without a finish has no ring, rows whose tile doesn't
/// resolve count as zero, and a material without a price costs zero. Geometry
/// is not checked; see [`crate::validation`].
///
/// ## Example
/// ```rust
/// use vereda_core::{
///     estimate_tiling, CalculationSettings, PoolGeometry, SideConfiguration, TileCatalogEntry,
///     TileConfiguration,
/// };
///
/// let catalog = vec![TileCatalogEntry {
///     id: "tile-50x50".to_string(),
///     name: "Loseta".to_string(),
///     width_cm: 50.0,
///     length_cm: 50.0,
///     price_per_unit_cents: 0,
/// }];
/// let mut config = TileConfiguration::default();
/// config.north = SideConfiguration::default().with_rows(1, "tile-50x50");
///
/// let pool = PoolGeometry::new(2.5, 5.0);
/// let estimate = estimate_tiling(&pool, &config, &catalog, &CalculationSettings::default(), &[]);
/// assert_eq!(estimate.tile_quantity("tile-50x50"), Some(5));
/// ```
#[instrument(level = "debug", skip_all, fields(length = pool.length, width = pool.width))]
pub fn estimate_tiling(
    pool: &PoolGeometry,
    config: &TileConfiguration,
    catalog: &[TileCatalogEntry],
    settings: &CalculationSettings,
    prices: &[MaterialPriceEntry],
) -> TilingEstimate {
    let layout = layout_tiles(pool, config, catalog);
    let sidewalk_area_m2 = layout.sidewalk_area_m2();

    let perimeter_with_rows_m = pool.perimeter_with_rows(
        config.north.rows,
        config.south.rows,
        config.east.rows,
        config.west.rows,
    );
    // Nothing tiled, nothing to grout.
    let joint_length_m = if sidewalk_area_m2 > 0.0 {
        perimeter_with_rows_m
    } else {
        0.0
    };

    let prices = PriceTable::new(prices);
    let materials = calculate_sidewalk_materials(sidewalk_area_m2, joint_length_m, settings, &prices);
    let total_material_cost = materials.total_cost();

    debug!(
        sidewalk_area_m2,
        tile_lines = layout.ledger.len(),
        total_material_cost = %total_material_cost,
        "Tiling estimate complete"
    );

    TilingEstimate {
        sidewalk_area_m2,
        perimeter_m: pool.perimeter(),
        perimeter_with_rows_m,
        sides: layout.sides,
        tiles: layout.ledger.into_lines(),
        materials,
        total_material_cost,
    }
}

// =============================================================================
// Project Materials
// =============================================================================

/// Which calculator a merged material line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MaterialSource {
    Sidewalk,
    Bed,
}

/// A named material line in the merged project ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMaterialLine {
    pub source: MaterialSource,
    pub key: String,
    #[serde(flatten)]
    pub line: MaterialQuantityLine,
}

/// Sidewalk and bed billable materials for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMaterials {
    pub lines: Vec<ProjectMaterialLine>,
    pub total_material_cost: Money,
    pub total_bed_material_cost: Money,
    pub total_cost: Money,
}

impl ProjectMaterials {
    /// Merges the sidewalk and bed ledgers. Reference kg lines are left out.
    pub fn combine(tiling: &TilingEstimate, bed: &BedEstimate) -> Self {
        let sidewalk = tiling
            .materials
            .billable()
            .into_iter()
            .map(|(key, line)| (MaterialSource::Sidewalk, key, line));
        let bed_lines = bed
            .bed_materials
            .billable()
            .into_iter()
            .map(|(key, line)| (MaterialSource::Bed, key, line));

        let lines = sidewalk
            .chain(bed_lines)
            .map(|(source, key, line)| ProjectMaterialLine {
                source,
                key: key.to_string(),
                line: line.clone(),
            })
            .collect();

        ProjectMaterials {
            lines,
            total_material_cost: tiling.total_material_cost,
            total_bed_material_cost: bed.total_bed_material_cost,
            total_cost: tiling.total_material_cost + bed.total_bed_material_cost,
        }
    }
}

// =============================================================================
// Estimate Request
// =============================================================================

/// All estimator inputs in one document.
///
/// ## JSON Shape
/// ```json
/// {
///   "pool": { "length": 8.0, "width": 4.0 },
///   "tileConfiguration": {
///     "north": { "firstRingType": "LOMO_BALLENA", "rows": 2, "selectedTileId": "t1" }
///   },
///   "tileCatalog": [],
///   "settings": {},
///   "prices": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub pool: PoolGeometry,
    #[serde(default)]
    pub tile_configuration: TileConfiguration,
    #[serde(default)]
    pub tile_catalog: Vec<TileCatalogEntry>,
    #[serde(default)]
    pub settings: CalculationSettings,
    #[serde(default)]
    pub bed_settings: BedSettings,
    #[serde(default)]
    pub prices: Vec<MaterialPriceEntry>,
}

impl EstimateRequest {
    /// Parses a request document.
    pub fn from_json_str(source: &str) -> CoreResult<Self> {
        serde_json::from_str(source).map_err(|e| CoreError::InvalidRequest(e.to_string()))
    }

    /// Runs [`estimate_tiling`] over this request.
    pub fn estimate(&self) -> TilingEstimate {
        estimate_tiling(
            &self.pool,
            &self.tile_configuration,
            &self.tile_catalog,
            &self.settings,
            &self.prices,
        )
    }

    /// Runs the bed calculator over this request.
    pub fn estimate_bed(&self) -> BedEstimate {
        calculate_bed_materials(&self.pool, &self.bed_settings, &self.prices)
    }

    /// Sidewalk and bed merged.
    pub fn estimate_project(&self) -> ProjectMaterials {
        ProjectMaterials::combine(&self.estimate(), &self.estimate_bed())
    }

    /// Soft problems the estimate would silently count as zero.
    pub fn warnings(&self) -> Vec<ConfigurationWarning> {
        inspect_configuration(&self.tile_configuration, &self.tile_catalog)
    }

    /// Strict check: hard validation errors, then the first warning as an error.
    pub fn validate(&self) -> CoreResult<()> {
        validate_pool_geometry(&self.pool)?;
        validate_tile_configuration(&self.tile_configuration)?;
        validate_settings(&self.settings)?;
        validate_bed_settings(&self.bed_settings)?;

        if let Some(warning) = self.warnings().into_iter().next() {
            warn!(%warning, "Estimate request rejected");
            return Err(warning.into_error());
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FirstRingType, SideConfiguration};

    fn catalog() -> Vec<TileCatalogEntry> {
        vec![TileCatalogEntry {
            id: "tile-50x50".to_string(),
            name: "Loseta".to_string(),
            width_cm: 50.0,
            length_cm: 50.0,
            price_per_unit_cents: 0,
        }]
    }

    #[test]
    fn test_zero_config_is_all_zero() {
        let estimate = estimate_tiling(
            &PoolGeometry::new(2.5, 5.0),
            &TileConfiguration::default(),
            &catalog(),
            &CalculationSettings::default(),
            &[],
        );

        assert_eq!(estimate.sidewalk_area_m2, 0.0);
        assert!(estimate.tiles.is_empty());
        assert_eq!(estimate.perimeter_m, 15.0);
        for (_, line) in estimate.materials.billable() {
            assert_eq!(line.quantity, 0.0);
        }
        assert!(estimate.total_material_cost.is_zero());
    }

    #[test]
    fn test_unresolved_tile_still_counts_ring() {
        let mut config = TileConfiguration::default();
        config.north = SideConfiguration::ring(FirstRingType::Perimeter).with_rows(2, "missing");

        let estimate = estimate_tiling(
            &PoolGeometry::new(2.5, 5.0),
            &config,
            &catalog(),
            &CalculationSettings::default(),
            &[],
        );

        assert_eq!(estimate.tiles.len(), 1);
        assert_eq!(estimate.tile_quantity("firstRing_PERIMETER"), Some(7));
        assert!((estimate.sidewalk_area_m2 - 2.5 * 0.408).abs() < 1e-12);
    }

    #[test]
    fn test_total_tiles() {
        let config = TileConfiguration::uniform(SideConfiguration::ring(FirstRingType::LomoBallena));
        let estimate = estimate_tiling(
            &PoolGeometry::new(2.5, 5.0),
            &config,
            &[],
            &CalculationSettings::default(),
            &[],
        );
        // 26 ring + 4 corners
        assert_eq!(estimate.total_tiles(), 30);
    }

    #[test]
    fn test_request_from_json() {
        let doc = r#"{
            "pool": { "length": 2.5, "width": 5.0 },
            "tileConfiguration": {
                "north": { "firstRingType": "L_FINISH", "rows": 1, "selectedTileId": "tile-50x50" }
            },
            "tileCatalog": [
                { "id": "tile-50x50", "name": "Loseta", "widthCm": 50, "lengthCm": 50 }
            ]
        }"#;
        let request = EstimateRequest::from_json_str(doc).unwrap();
        assert!(request.validate().is_ok());

        let estimate = request.estimate();
        assert_eq!(estimate.tile_quantity("tile-50x50"), Some(5));
        assert_eq!(estimate.tile_quantity("firstRing_L_FINISH"), Some(7));
    }

    #[test]
    fn test_request_rejects_garbage() {
        let err = EstimateRequest::from_json_str("{ \"pool\": 3 }").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest(_)));
    }

    #[test]
    fn test_request_validate_reports_missing_tile() {
        let mut config = TileConfiguration::default();
        config.east = SideConfiguration::default().with_rows(1, "missing");
        let request = EstimateRequest {
            pool: PoolGeometry::new(2.5, 5.0),
            tile_configuration: config,
            tile_catalog: catalog(),
            settings: CalculationSettings::default(),
            bed_settings: BedSettings::default(),
            prices: Vec::new(),
        };

        assert_eq!(request.warnings().len(), 1);
        assert!(matches!(request.validate(), Err(CoreError::TileNotFound { .. })));
    }

    #[test]
    fn test_project_materials_combine() {
        let prices = vec![
            MaterialPriceEntry {
                material_type: "CEMENT".to_string(),
                name: "Cemento".to_string(),
                price_per_unit_cents: 1000,
                unit: "bolsa".to_string(),
                bag_weight: None,
            },
            MaterialPriceEntry {
                material_type: "GEOMEMBRANE".to_string(),
                name: "Geomembrana".to_string(),
                price_per_unit_cents: 200,
                unit: "m²".to_string(),
                bag_weight: None,
            },
        ];
        let request = EstimateRequest {
            pool: PoolGeometry::new(8.0, 4.0),
            tile_configuration: TileConfiguration::uniform(SideConfiguration::ring(
                FirstRingType::Perimeter,
            )),
            tile_catalog: Vec::new(),
            settings: CalculationSettings::default(),
            bed_settings: BedSettings::default(),
            prices,
        };

        let tiling = request.estimate();
        let bed = request.estimate_bed();
        let project = ProjectMaterials::combine(&tiling, &bed);

        assert_eq!(project.lines.len(), 8 + 5);
        assert_eq!(project.lines[0].source, MaterialSource::Sidewalk);
        assert_eq!(project.lines[8].key, "geomembrane");
        assert_eq!(project.lines[8].source, MaterialSource::Bed);
        assert_eq!(
            project.total_cost,
            tiling.total_material_cost + bed.total_bed_material_cost
        );
        assert!(!bed.total_bed_material_cost.is_zero());
        assert_eq!(project, request.estimate_project());
    }
}
