//! # Ring & Row Layout
//!
//! Decomposes the sidewalk into per-side strips and counts the tiles in each.
//!
//! ## Layout Per Side
//! ```text
//!        ◄──────────── run length (side of the pool) ────────────►
//!   ┌────┬────┬────┬────┬────┬────┬────┬────┬────┬────┐
//!   │    │    │    │    │    │    │    │    │    │    │  additional row 2
//!   ├────┼────┼────┼────┼────┼────┼────┼────┼────┼────┤
//!   │    │    │    │    │    │    │    │    │    │    │  additional row 1
//!   ├────┴────┴────┴────┴────┴────┴────┴────┴────┴────┤
//!   │ ▓▓ │ ▓▓ │ ▓▓ │ ▓▓ │ ▓▓ │ ▓▓ │ ▓▓ │ ▓▓ │ ▓▓ │ ▓▓ │  first ring (finish)
//!   └─────────────────────────────────────────────────┘
//!   ~~~~~~~~~~~~~~~~~~~~~~~~~~ POOL ~~~~~~~~~~~~~~~~~~~~~~~~~~
//!
//!   tiles along the side = ceil(run / (tile + joint))
//!   strip depth          = (tile width + joint) × rows
//! ```
//!
//! Each side is computed only from its own run length. Rows on a
//! perpendicular side never lengthen this side's run.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::geometry::{PoolGeometry, Side};
use crate::ledger::TileLedger;
use crate::types::{
    FirstRingType, SideConfiguration, TileCatalogEntry, TileConfiguration, TileLineKind,
};
use crate::{CORNER_PIECES_PER_POOL, JOINT_WIDTH_M};

/// Display name of the whale's-back corner piece.
const LOMO_BALLENA_CORNER_NAME: &str = "Esquinero Lomo Ballena (50x50cm)";

// =============================================================================
// Counting
// =============================================================================

/// Whole tiles laid end-to-end to span `run_length`. A partial tile counts as one.
#[inline]
pub fn tiles_to_span(run_length: f64, effective_tile_length: f64) -> i64 {
    (run_length / effective_tile_length).ceil() as i64
}

// =============================================================================
// First Ring
// =============================================================================

/// First-ring result for one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstRingLayout {
    pub first_ring_type: FirstRingType,
    pub tile_count: i64,
    pub area_m2: f64,
}

/// Lays the finish ring along one side.
///
/// The ring's depth is the finish width plus joint, which is also the
/// effective length used for counting since finish tiles are square.
pub fn first_ring(run_length: f64, first_ring_type: Option<FirstRingType>) -> Option<FirstRingLayout> {
    let first_ring_type = first_ring_type?;
    let effective_length = first_ring_type.tile_width_m() + JOINT_WIDTH_M;

    Some(FirstRingLayout {
        first_ring_type,
        tile_count: tiles_to_span(run_length, effective_length),
        area_m2: run_length * effective_length,
    })
}

// =============================================================================
// Additional Rows
// =============================================================================

/// Additional-row result for one side.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub tile_id: String,
    pub tile_name: String,
    pub tiles_per_row: i64,
    pub total_tiles: i64,
    pub area_m2: f64,
}

/// Finds a catalog tile usable for counting: matching id, positive dimensions.
pub fn resolve_tile<'a>(catalog: &'a [TileCatalogEntry], tile_id: &str) -> Option<&'a TileCatalogEntry> {
    catalog
        .iter()
        .find(|tile| tile.id == tile_id)
        .filter(|tile| tile.has_valid_dimensions())
}

/// Lays `rows` straight rows of the selected catalog tile along one side.
///
/// Returns `None` when there are no rows or the tile doesn't resolve.
/// Length runs along the side, width gives the row's depth.
pub fn additional_rows(
    side: Side,
    run_length: f64,
    config: &SideConfiguration,
    catalog: &[TileCatalogEntry],
) -> Option<RowLayout> {
    if config.rows == 0 {
        return None;
    }

    let Some(tile_id) = config.tile_id() else {
        debug!(%side, rows = config.rows, "Rows configured without a tile; side contributes no rows");
        return None;
    };

    let Some(tile) = resolve_tile(catalog, tile_id) else {
        debug!(%side, tile_id, "Selected tile not usable; side contributes no rows");
        return None;
    };

    let rows = i64::from(config.rows);
    let effective_tile_length = tile.length_m() + JOINT_WIDTH_M;
    let effective_tile_width = tile.width_m() + JOINT_WIDTH_M;
    let tiles_per_row = tiles_to_span(run_length, effective_tile_length);

    Some(RowLayout {
        tile_id: tile.id.clone(),
        tile_name: tile.display_name(),
        tiles_per_row,
        total_tiles: tiles_per_row.saturating_mul(rows),
        area_m2: run_length * (effective_tile_width * f64::from(config.rows)),
    })
}

// =============================================================================
// Corner Pieces
// =============================================================================

/// Adds the whale's-back corner line when any side uses that finish.
///
/// The line is always exactly [`CORNER_PIECES_PER_POOL`], however many sides
/// qualify. The corner-occupied units are taken off the whale's-back ring line.
/// Returns whether the line was emitted.
pub fn derive_corner_pieces(config: &TileConfiguration, ledger: &mut TileLedger) -> bool {
    let corner_finish = config
        .iter()
        .filter_map(|(_, side)| side.first_ring_type)
        .find(FirstRingType::needs_corner_pieces);

    let Some(finish) = corner_finish else {
        return false;
    };

    ledger.set(
        &finish.corner_key(),
        LOMO_BALLENA_CORNER_NAME,
        TileLineKind::Corner,
        CORNER_PIECES_PER_POOL,
    );
    let replaced = ledger.subtract_saturating(&finish.ring_key(), CORNER_PIECES_PER_POOL);
    trace!(replaced, "Corner pieces replace ring tiles");
    true
}

// =============================================================================
// Full Layout
// =============================================================================

/// What one side contributes to the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SideContribution {
    pub side: Side,
    pub run_length_m: f64,
    pub ring_area_m2: f64,
    pub row_area_m2: f64,
    /// Ring tiles before corner pieces replace any.
    pub ring_tiles: i64,
    pub row_tiles: i64,
}

impl SideContribution {
    /// Ring plus rows.
    pub fn area_m2(&self) -> f64 {
        self.ring_area_m2 + self.row_area_m2
    }
}

/// Tile ledger plus the per-side breakdown it was built from.
#[derive(Debug, Clone, Default)]
pub struct TileLayout {
    pub ledger: TileLedger,
    pub sides: Vec<SideContribution>,
}

impl TileLayout {
    /// Total sidewalk area: the plain sum of every side's ring and rows.
    pub fn sidewalk_area_m2(&self) -> f64 {
        self.sides.iter().map(SideContribution::area_m2).sum()
    }
}

/// Lays out all four sides.
///
/// Ledger order: first-ring lines, the corner line, then additional rows.
pub fn layout_tiles(
    pool: &PoolGeometry,
    config: &TileConfiguration,
    catalog: &[TileCatalogEntry],
) -> TileLayout {
    let mut ledger = TileLedger::new();
    let mut sides = Vec::with_capacity(Side::ALL.len());
    let mut row_layouts = Vec::new();

    for (side, side_config) in config.iter() {
        let run_length = pool.run_length(side);
        let ring = first_ring(run_length, side_config.first_ring_type);
        let rows = additional_rows(side, run_length, side_config, catalog);

        if let Some(ring) = &ring {
            let finish = ring.first_ring_type;
            ledger.add(
                &finish.ring_key(),
                &finish.ring_display_name(),
                TileLineKind::FirstRing,
                ring.tile_count,
            );
        }

        sides.push(SideContribution {
            side,
            run_length_m: run_length,
            ring_area_m2: ring.map_or(0.0, |ring| ring.area_m2),
            row_area_m2: rows.as_ref().map_or(0.0, |rows| rows.area_m2),
            ring_tiles: ring.map_or(0, |ring| ring.tile_count),
            row_tiles: rows.as_ref().map_or(0, |rows| rows.total_tiles),
        });

        if let Some(rows) = rows {
            row_layouts.push(rows);
        }
    }

    derive_corner_pieces(config, &mut ledger);

    for rows in row_layouts {
        ledger.add(
            &rows.tile_id,
            &rows.tile_name,
            TileLineKind::AdditionalRows,
            rows.total_tiles,
        );
    }

    TileLayout { ledger, sides }
}

// =============================================================================
// Unit Tests
// =============================================================================
