//! # Bed Materials
//!
//! The sand-cement bed poured under the pool shell and the gravel-filled drain
//! trench around it. Computed independently of the sidewalk; the caller merges
//! both ledgers (see [`crate::estimate::ProjectMaterials`]).
//!
//! ```text
//!     ┌─────────────────────────── pool floor ───────────────────────────┐
//!     │  geomembrane        floor area × rate                  ceil  m²  │
//!     │  electrowelded mesh floor area × rate (overlap)        ceil  m²  │
//!     │  bed volume         floor area × thickness / 100             m³  │
//!     │    sand             bed volume                         2 dp  m³  │
//!     │    cement           bed volume × bags/m³               ceil bags │
//!     └──────────────────────────────────────────────────────────────────┘
//!   ░░ drain trench  perimeter × width × depth / 1e4 (cm² → m²) 2 dp  m³ ░░
//! ```
//!
//! Trench width and depth are both in centimeters, so their product is
//! divided by 1e4. Earlier estimator releases divided by 1e6, which quoted
//! drain stone at a hundredth of the real volume; figures from those
//! releases will not match.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::geometry::PoolGeometry;
use crate::materials::{round_up, volume_line, whole_units_line};
use crate::money::Money;
use crate::pricing::{bag_unit, material_type, PriceTable};
use crate::settings::BedSettings;
use crate::types::{MaterialPriceEntry, MaterialQuantityLine};

/// Material lines of the pool bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BedMaterials {
    pub geomembrane: MaterialQuantityLine,
    pub electrowelded_mesh: MaterialQuantityLine,
    pub sand_for_bed: MaterialQuantityLine,
    pub cement_bags: MaterialQuantityLine,
    /// Reference only, repeats the bag cost.
    pub cement_kg: MaterialQuantityLine,
    pub drain_stone: MaterialQuantityLine,
}

impl BedMaterials {
    /// Lines that make up the total, keyed by their serialized name.
    pub fn billable(&self) -> [(&'static str, &MaterialQuantityLine); 5] {
        [
            ("geomembrane", &self.geomembrane),
            ("electroweldedMesh", &self.electrowelded_mesh),
            ("sandForBed", &self.sand_for_bed),
            ("cementBags", &self.cement_bags),
            ("drainStone", &self.drain_stone),
        ]
    }
}

/// Bed calculator output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BedEstimate {
    pub pool_area_m2: f64,
    pub bed_materials: BedMaterials,
    pub total_bed_material_cost: Money,
}

/// Computes bed materials for a pool.
///
/// Cement bag weight comes from the price table's `CEMENT` entry, falling
/// back to [`BedSettings::bed_cement_bag_weight`].
pub fn calculate_bed_materials(
    pool: &PoolGeometry,
    settings: &BedSettings,
    prices: &[MaterialPriceEntry],
) -> BedEstimate {
    let prices = PriceTable::new(prices);
    let pool_area_m2 = pool.area();

    let geomembrane_m2 = pool_area_m2 * settings.geomembrane_m2_per_m2;
    let mesh_m2 = pool_area_m2 * settings.electrowelded_mesh_m2_per_m2;
    let bed_volume_m3 = pool_area_m2 * settings.bed_thickness_cm / 100.0;
    let cement_bags = bed_volume_m3 * settings.bed_cement_bags_per_m3;
    let bag_weight_kg = prices.bag_weight(material_type::CEMENT, settings.bed_cement_bag_weight);
    let trench_volume_m3 = pool.perimeter()
        * settings.drain_trench_width_cm
        * settings.drain_trench_depth_cm
        / 10_000.0;

    debug!(pool_area_m2, bed_volume_m3, trench_volume_m3, "Computing bed materials");

    let cement_line = whole_units_line(
        cement_bags,
        &bag_unit(bag_weight_kg),
        prices.price_for(material_type::CEMENT),
    );
    let cement_kg = MaterialQuantityLine::new(
        round_up(cement_bags * bag_weight_kg) as f64,
        "kg",
        cement_line.cost,
    );

    let bed_materials = BedMaterials {
        geomembrane: whole_units_line(
            geomembrane_m2,
            "m²",
            prices.price_for(material_type::GEOMEMBRANE),
        ),
        electrowelded_mesh: whole_units_line(
            mesh_m2,
            "m²",
            prices.price_for(material_type::ELECTROWELDED_MESH),
        ),
        sand_for_bed: volume_line(bed_volume_m3, prices.price_for(material_type::SAND)),
        cement_bags: cement_line,
        cement_kg,
        drain_stone: volume_line(trench_volume_m3, prices.price_for(material_type::STONE)),
    };

    let total_bed_material_cost = bed_materials
        .billable()
        .iter()
        .map(|(_, line)| line.cost)
        .sum();

    BedEstimate {
        pool_area_m2,
        bed_materials,
        total_bed_material_cost,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
