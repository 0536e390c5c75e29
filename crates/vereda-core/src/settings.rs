//! # Calculation Settings
//!
//! Per-unit rates that turn areas and lineal meters into material quantities.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Settings Come From                             │
//! │                                                                         │
//! │  1. Host-supplied values (per user, stored by the host)                │
//! │     CalculationSettings { adhesive_kg_per_m2: 4.0, .. }                │
//! │                                                                         │
//! │  2. Settings document parsed by this module                            │
//! │     EstimatorSettings::from_toml_str / from_json_str                   │
//! │                                                                         │
//! │  3. Default Values (any field left out)                                │
//! │     CalculationSettings::default(), BedSettings::default()             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settings Document Format
//! ```toml
//! [calculation]
//! adhesiveKgPerM2 = 4.0
//! sidewalkBaseThicknessCm = 10.0
//! waterproofingCoats = 2
//!
//! [bed]
//! bedThicknessCm = 10.0
//! drainTrenchWidthCm = 15.0
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Sidewalk Calculation Settings
// =============================================================================

/// Rates for the sidewalk slab and its surface treatments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSettings {
    /// kg of tile adhesive per m² of sidewalk.
    #[serde(default = "default_adhesive_kg_per_m2")]
    pub adhesive_kg_per_m2: f64,

    /// Concrete base thickness under the tiles (cm).
    #[serde(default = "default_sidewalk_base_thickness_cm")]
    pub sidewalk_base_thickness_cm: f64,

    /// kg of cement per m³ of slab.
    #[serde(default = "default_cement_kg_per_m3")]
    pub cement_kg_per_m3: f64,

    /// m³ of sand per m³ of slab.
    #[serde(default = "default_sand_m3_per_m3")]
    pub sand_m3_per_m3: f64,

    /// m³ of gravel per m³ of slab.
    #[serde(default = "default_gravel_m3_per_m3")]
    pub gravel_m3_per_m3: f64,

    /// Grout joint width (mm).
    ///
    /// Not read by the tile-count path, which uses [`crate::JOINT_WIDTH_M`].
    #[serde(default = "default_grout_joint_width_mm")]
    pub grout_joint_width_mm: f64,

    /// kg of white cement per lineal meter of joints.
    #[serde(default = "default_white_cement_kg_per_lineal_m")]
    pub white_cement_kg_per_lineal_m: f64,

    /// kg of marmolina per lineal meter of joints.
    #[serde(default = "default_marmolina_kg_per_lineal_m")]
    pub marmolina_kg_per_lineal_m: f64,

    /// m² of wire mesh per m² of sidewalk (overlap included).
    #[serde(default = "default_wire_mesh_m2_per_m2")]
    pub wire_mesh_m2_per_m2: f64,

    /// kg of waterproofing per m² per coat.
    #[serde(default = "default_waterproofing_kg_per_m2")]
    pub waterproofing_kg_per_m2: f64,

    /// Number of waterproofing coats.
    #[serde(default = "default_waterproofing_coats")]
    pub waterproofing_coats: u32,
}

fn default_adhesive_kg_per_m2() -> f64 {
    5.0
}

fn default_sidewalk_base_thickness_cm() -> f64 {
    10.0
}

fn default_cement_kg_per_m3() -> f64 {
    350.0
}

fn default_sand_m3_per_m3() -> f64 {
    0.5
}

fn default_gravel_m3_per_m3() -> f64 {
    0.8
}

fn default_grout_joint_width_mm() -> f64 {
    3.0
}

fn default_white_cement_kg_per_lineal_m() -> f64 {
    0.5
}

fn default_marmolina_kg_per_lineal_m() -> f64 {
    0.3
}

fn default_wire_mesh_m2_per_m2() -> f64 {
    1.0
}

fn default_waterproofing_kg_per_m2() -> f64 {
    1.5
}

fn default_waterproofing_coats() -> u32 {
    2
}

impl Default for CalculationSettings {
    fn default() -> Self {
        CalculationSettings {
            adhesive_kg_per_m2: default_adhesive_kg_per_m2(),
            sidewalk_base_thickness_cm: default_sidewalk_base_thickness_cm(),
            cement_kg_per_m3: default_cement_kg_per_m3(),
            sand_m3_per_m3: default_sand_m3_per_m3(),
            gravel_m3_per_m3: default_gravel_m3_per_m3(),
            grout_joint_width_mm: default_grout_joint_width_mm(),
            white_cement_kg_per_lineal_m: default_white_cement_kg_per_lineal_m(),
            marmolina_kg_per_lineal_m: default_marmolina_kg_per_lineal_m(),
            wire_mesh_m2_per_m2: default_wire_mesh_m2_per_m2(),
            waterproofing_kg_per_m2: default_waterproofing_kg_per_m2(),
            waterproofing_coats: default_waterproofing_coats(),
        }
    }
}

// =============================================================================
// Bed Settings
// =============================================================================

/// Rates for the sand-cement bed under the pool shell and its drain trench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BedSettings {
    /// Bed thickness (cm).
    #[serde(default = "default_bed_thickness_cm")]
    pub bed_thickness_cm: f64,

    /// Cement bags per m³ of bed.
    #[serde(default = "default_bed_cement_bags_per_m3")]
    pub bed_cement_bags_per_m3: f64,

    /// Bag weight (kg) when the price table has no cement bag weight.
    #[serde(default = "default_bed_cement_bag_weight")]
    pub bed_cement_bag_weight: f64,

    /// Perimeter drain trench width (cm).
    #[serde(default = "default_drain_trench_cm")]
    pub drain_trench_width_cm: f64,

    /// Perimeter drain trench depth (cm).
    #[serde(default = "default_drain_trench_cm")]
    pub drain_trench_depth_cm: f64,

    /// m² of geomembrane per m² of pool floor.
    #[serde(default = "default_geomembrane_m2_per_m2")]
    pub geomembrane_m2_per_m2: f64,

    /// m² of electrowelded mesh per m² of pool floor (15% overlap).
    #[serde(default = "default_electrowelded_mesh_m2_per_m2")]
    pub electrowelded_mesh_m2_per_m2: f64,
}

fn default_bed_thickness_cm() -> f64 {
    10.0
}

fn default_bed_cement_bags_per_m3() -> f64 {
    5.0
}

fn default_bed_cement_bag_weight() -> f64 {
    50.0
}

fn default_drain_trench_cm() -> f64 {
    15.0
}

fn default_geomembrane_m2_per_m2() -> f64 {
    1.0
}

fn default_electrowelded_mesh_m2_per_m2() -> f64 {
    1.15
}

impl Default for BedSettings {
    fn default() -> Self {
        BedSettings {
            bed_thickness_cm: default_bed_thickness_cm(),
            bed_cement_bags_per_m3: default_bed_cement_bags_per_m3(),
            bed_cement_bag_weight: default_bed_cement_bag_weight(),
            drain_trench_width_cm: default_drain_trench_cm(),
            drain_trench_depth_cm: default_drain_trench_cm(),
            geomembrane_m2_per_m2: default_geomembrane_m2_per_m2(),
            electrowelded_mesh_m2_per_m2: default_electrowelded_mesh_m2_per_m2(),
        }
    }
}

// =============================================================================
// Settings Document
// =============================================================================

/// Both rate tables, as stored in one settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EstimatorSettings {
    #[serde(default)]
    pub calculation: CalculationSettings,
    #[serde(default)]
    pub bed: BedSettings,
}

impl EstimatorSettings {
    /// Parses a TOML settings document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let settings: EstimatorSettings =
            toml::from_str(source).map_err(|e| CoreError::InvalidSettings(e.to_string()))?;
        debug!(
            thickness_cm = settings.calculation.sidewalk_base_thickness_cm,
            coats = settings.calculation.waterproofing_coats,
            "Loaded estimator settings from TOML"
        );
        Ok(settings)
    }

    /// Parses the camelCase JSON shape the host stores per user.
    pub fn from_json_str(source: &str) -> CoreResult<Self> {
        let settings: EstimatorSettings =
            serde_json::from_str(source).map_err(|e| CoreError::InvalidSettings(e.to_string()))?;
        debug!("Loaded estimator settings from JSON");
        Ok(settings)
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string(self).map_err(|e| CoreError::InvalidSettings(e.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
