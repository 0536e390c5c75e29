//! # Validation Module
//!
//! Caller-side checks for estimator inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host form                                                    │
//! │  ├── Numeric inputs, dropdowns for finish and tile                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Hard errors: geometry, rates, row counts    (ValidationError)     │
//! │  └── Soft warnings: tiles that won't resolve     (ConfigurationWarning)│
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: estimate_tiling                                              │
//! │  └── Never fails; anything unusable contributes zero                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The estimate never calls into this module.
//!
//! ## Usage
//! ```rust
//! use vereda_core::validation::{inspect_configuration, validate_pool_geometry};
//! use vereda_core::{PoolGeometry, SideConfiguration, TileConfiguration};
//!
//! assert!(validate_pool_geometry(&PoolGeometry::new(8.0, 4.0)).is_ok());
//! assert!(validate_pool_geometry(&PoolGeometry::new(-1.0, 4.0)).is_err());
//!
//! let mut config = TileConfiguration::default();
//! config.north = SideConfiguration::default().with_rows(2, "missing-tile");
//! let warnings = inspect_configuration(&config, &[]);
//! assert_eq!(warnings.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::geometry::{PoolGeometry, Side};
use crate::settings::{BedSettings, CalculationSettings};
use crate::types::{SideConfiguration, TileCatalogEntry, TileConfiguration};
use crate::MAX_ROWS_PER_SIDE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a strictly positive measurement.
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a rate that may be zero (a material the job doesn't use).
pub fn validate_rate(field: &str, value: f64) -> ValidationResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Input Validators
// =============================================================================

/// Validates pool dimensions.
///
/// ## Rules
/// - `length` and `width` finite and greater than zero
pub fn validate_pool_geometry(pool: &PoolGeometry) -> ValidationResult<()> {
    validate_positive("length", pool.length)?;
    validate_positive("width", pool.width)?;
    Ok(())
}

/// Validates one side's configuration on its own.
///
/// ## Rules
/// - `rows` at most [`MAX_ROWS_PER_SIDE`]
/// - a tile must be selected when `rows > 0`
///
/// Whether the tile exists in the catalog is a warning, see
/// [`inspect_configuration`].
pub fn validate_side_configuration(side: Side, config: &SideConfiguration) -> ValidationResult<()> {
    if config.rows > MAX_ROWS_PER_SIDE {
        return Err(ValidationError::OutOfRange {
            field: format!("{side}.rows"),
            min: 0.0,
            max: f64::from(MAX_ROWS_PER_SIDE),
        });
    }

    if config.rows > 0 && config.tile_id().is_none() {
        return Err(ValidationError::Required {
            field: format!("{side}.selectedTileId"),
        });
    }

    Ok(())
}

/// Validates all four sides, stopping at the first failure.
pub fn validate_tile_configuration(config: &TileConfiguration) -> ValidationResult<()> {
    for (side, side_config) in config.iter() {
        validate_side_configuration(side, side_config)?;
    }
    Ok(())
}

/// Validates sidewalk rates.
///
/// ## Rules
/// - slab thickness finite and greater than zero
/// - every other rate finite and not negative
pub fn validate_settings(settings: &CalculationSettings) -> ValidationResult<()> {
    validate_positive("sidewalkBaseThicknessCm", settings.sidewalk_base_thickness_cm)?;

    let rates = [
        ("adhesiveKgPerM2", settings.adhesive_kg_per_m2),
        ("cementKgPerM3", settings.cement_kg_per_m3),
        ("sandM3PerM3", settings.sand_m3_per_m3),
        ("gravelM3PerM3", settings.gravel_m3_per_m3),
        ("groutJointWidthMm", settings.grout_joint_width_mm),
        ("whiteCementKgPerLinealM", settings.white_cement_kg_per_lineal_m),
        ("marmolinaKgPerLinealM", settings.marmolina_kg_per_lineal_m),
        ("wireMeshM2PerM2", settings.wire_mesh_m2_per_m2),
        ("waterproofingKgPerM2", settings.waterproofing_kg_per_m2),
    ];
    for (field, value) in rates {
        validate_rate(field, value)?;
    }
    Ok(())
}

/// Validates bed rates.
pub fn validate_bed_settings(settings: &BedSettings) -> ValidationResult<()> {
    validate_positive("bedThicknessCm", settings.bed_thickness_cm)?;
    validate_positive("bedCementBagWeight", settings.bed_cement_bag_weight)?;

    let rates = [
        ("bedCementBagsPerM3", settings.bed_cement_bags_per_m3),
        ("drainTrenchWidthCm", settings.drain_trench_width_cm),
        ("drainTrenchDepthCm", settings.drain_trench_depth_cm),
        ("geomembraneM2PerM2", settings.geomembrane_m2_per_m2),
        ("electroweldedMeshM2PerM2", settings.electrowelded_mesh_m2_per_m2),
    ];
    for (field, value) in rates {
        validate_rate(field, value)?;
    }
    Ok(())
}

// =============================================================================
// Configuration Warnings
// =============================================================================

/// A configuration the estimate accepts but will silently count as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigurationWarning {
    /// Rows requested with no tile selected.
    RowsWithoutTile { side: Side, rows: u32 },

    /// The selected tile id is not in the catalog.
    TileNotFound {
        side: Side,
        #[serde(rename = "tileId")]
        tile_id: String,
    },

    /// The selected tile has a zero or negative dimension.
    InvalidTileDimensions {
        side: Side,
        #[serde(rename = "tileId")]
        tile_id: String,
        #[serde(rename = "widthCm")]
        width_cm: f64,
        #[serde(rename = "lengthCm")]
        length_cm: f64,
    },
}

impl ConfigurationWarning {
    /// Side the warning is about.
    pub fn side(&self) -> Side {
        match self {
            ConfigurationWarning::RowsWithoutTile { side, .. }
            | ConfigurationWarning::TileNotFound { side, .. }
            | ConfigurationWarning::InvalidTileDimensions { side, .. } => *side,
        }
    }

    /// The equivalent hard error, for callers that refuse to estimate.
    pub fn into_error(self) -> CoreError {
        match self {
            ConfigurationWarning::RowsWithoutTile { side, .. } => ValidationError::Required {
                field: format!("{side}.selectedTileId"),
            }
            .into(),
            ConfigurationWarning::TileNotFound { side, tile_id } => {
                CoreError::TileNotFound { side, tile_id }
            }
            ConfigurationWarning::InvalidTileDimensions {
                tile_id,
                width_cm,
                length_cm,
                ..
            } => CoreError::InvalidTileDimensions {
                tile_id,
                width_cm,
                length_cm,
            },
        }
    }
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationWarning::RowsWithoutTile { side, rows } => {
                write!(f, "{side} side has {rows} rows but no tile selected")
            }
            ConfigurationWarning::TileNotFound { side, tile_id } => {
                write!(f, "Tile not found for {side} side: {tile_id}")
            }
            ConfigurationWarning::InvalidTileDimensions {
                side,
                tile_id,
                width_cm,
                length_cm,
            } => write!(
                f,
                "Tile {tile_id} on {side} side has invalid dimensions: {width_cm}x{length_cm}cm"
            ),
        }
    }
}

/// Lists every side whose additional rows will count as zero.
///
/// Sides with `rows == 0` are never reported, whatever tile they select.
pub fn inspect_configuration(
    config: &TileConfiguration,
    catalog: &[TileCatalogEntry],
) -> Vec<ConfigurationWarning> {
    config
        .iter()
        .filter(|(_, side_config)| side_config.rows > 0)
        .filter_map(|(side, side_config)| {
            let Some(tile_id) = side_config.tile_id() else {
                return Some(ConfigurationWarning::RowsWithoutTile {
                    side,
                    rows: side_config.rows,
                });
            };

            match catalog.iter().find(|tile| tile.id == tile_id) {
                None => Some(ConfigurationWarning::TileNotFound {
                    side,
                    tile_id: tile_id.to_string(),
                }),
                Some(tile) if !tile.has_valid_dimensions() => {
                    Some(ConfigurationWarning::InvalidTileDimensions {
                        side,
                        tile_id: tile.id.clone(),
                        width_cm: tile.width_cm,
                        length_cm: tile.length_cm,
                    })
                }
                Some(_) => None,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
