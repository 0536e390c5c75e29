//! # vereda-core: Pure Estimation Logic for Pool Sidewalks
//!
//! This crate is the **heart** of the estimator. Given a rectangular pool,
//! a per-side tiling configuration, a tile catalog, calculation settings and
//! a material price table, it produces the tile ledger and the concrete-slab
//! material ledger for the sidewalk (vereda) around the pool.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estimation Data Flow                             │
//! │                                                                         │
//! │   PoolGeometry + TileConfiguration + Catalog + Settings + PriceTable   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vereda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ geometry  │  │   rings   │  │ materials │  │    bed    │  │   │
//! │  │   │ run length│─►│ first ring│  │ slab, bags│  │ geomembr. │  │   │
//! │  │   │ perimeter │  │ rows      │  │ pricing   │  │ drain     │  │   │
//! │  │   └───────────┘  │ corners   │  └─────┬─────┘  └─────┬─────┘  │   │
//! │  │                  └─────┬─────┘        │              │        │   │
//! │  │                        ▼              ▼              ▼        │   │
//! │  │                  TileLedger ──► TilingEstimate ──► Project-   │   │
//! │  │                                                   Materials   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Pool geometry, compass sides, run lengths
//! - [`types`] - Side configuration, catalog entries, output lines
//! - [`settings`] - Calculation rates with defaults and TOML/JSON loading
//! - [`ledger`] - Tile ledger keyed by line identity
//! - [`rings`] - First ring, additional rows and corner pieces
//! - [`pricing`] - Lenient price and bag-weight lookup
//! - [`materials`] - Sidewalk slab material & cost aggregation
//! - [`bed`] - Internal bed materials (merged by the caller)
//! - [`estimate`] - The `estimate_tiling` entry point
//! - [`validation`] - Caller-side validation and warnings
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, bit for bit
//! 2. **Degrade to Zero**: the estimate never fails; missing data contributes nothing
//! 3. **Integer Money**: all costs are cents (i64)
//! 4. **Ledgers by Key**: repeated contributions accumulate into one line
//!
//! ## Example Usage
//!
//! ```rust
//! use vereda_core::{
//!     estimate_tiling, CalculationSettings, FirstRingType, PoolGeometry, SideConfiguration,
//!     TileConfiguration,
//! };
//!
//! let pool = PoolGeometry::new(2.5, 5.0);
//! let config = TileConfiguration::uniform(SideConfiguration::ring(FirstRingType::LomoBallena));
//!
//! let estimate = estimate_tiling(&pool, &config, &[], &CalculationSettings::default(), &[]);
//!
//! // 30 ring tiles, 4 of them replaced by corner pieces
//! assert_eq!(estimate.tile_quantity("firstRing_LOMO_BALLENA"), Some(26));
//! assert_eq!(estimate.tile_quantity("corner_LOMO_BALLENA"), Some(4));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bed;
pub mod error;
pub mod estimate;
pub mod geometry;
pub mod ledger;
pub mod materials;
pub mod money;
pub mod pricing;
pub mod rings;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bed::{calculate_bed_materials, BedEstimate, BedMaterials};
pub use error::{CoreError, CoreResult, ValidationError};
pub use estimate::{
    estimate_tiling, EstimateRequest, MaterialSource, ProjectMaterialLine, ProjectMaterials,
    TilingEstimate,
};
pub use geometry::{PoolGeometry, Side};
pub use ledger::TileLedger;
pub use materials::SidewalkMaterials;
pub use money::Money;
pub use pricing::PriceTable;
pub use rings::SideContribution;
pub use settings::{BedSettings, CalculationSettings, EstimatorSettings};
pub use types::*;
pub use validation::ConfigurationWarning;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Mortar joint added to every tile dimension before counting, in meters.
///
/// `CalculationSettings::grout_joint_width_mm` does not feed the tile-count
/// path; this constant does.
pub const JOINT_WIDTH_M: f64 = 0.008;

/// Corner pieces emitted for a pool with at least one whale's-back side.
/// One per physical corner of the rectangle.
pub const CORNER_PIECES_PER_POOL: i64 = 4;

/// Most additional rows a side may ask for before validation rejects it.
pub const MAX_ROWS_PER_SIDE: u32 = 20;

/// Unit label carried by every tile line.
pub const TILE_UNIT: &str = "unidades";

/// Cement bag weight (kg) when the price table has none.
pub const FALLBACK_CEMENT_BAG_KG: f64 = 50.0;

/// White cement bag weight (kg) when the price table has none.
pub const FALLBACK_WHITE_CEMENT_BAG_KG: f64 = 25.0;

/// Marmolina bag weight (kg) when the price table has none.
pub const FALLBACK_MARMOLINA_BAG_KG: f64 = 30.0;
