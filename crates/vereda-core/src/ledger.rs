//! # Tile Ledger
//!
//! Accumulates tile lines by their natural key so several sides contributing
//! the same tile (or the same finish type) end up on one line.
//!
//! ```text
//!   north: firstRing_LOMO_BALLENA += 5 ─┐
//!   south: firstRing_LOMO_BALLENA += 5 ─┼──► one line, quantity 20
//!   east:  firstRing_LOMO_BALLENA += 5 ─┤
//!   west:  firstRing_LOMO_BALLENA += 5 ─┘
//! ```
//!
//! Lines keep the order in which their key was first seen.

use std::collections::HashMap;

use crate::types::{TileLineKind, TileQuantityLine};

/// Insertion-ordered map of tile lines keyed by `tile_id`.
#[derive(Debug, Clone, Default)]
pub struct TileLedger {
    lines: Vec<TileQuantityLine>,
    index: HashMap<String, usize>,
}

impl TileLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the line under `key`, creating it on first use.
    ///
    /// The name and kind of an existing line are kept. Quantities saturate at
    /// `i64::MAX`.
    pub fn add(&mut self, key: &str, name: &str, kind: TileLineKind, quantity: i64) {
        match self.index.get(key) {
            Some(&position) => {
                let line = &mut self.lines[position];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => {
                let mut line = TileQuantityLine::new(key, name, kind);
                line.quantity = quantity;
                self.index.insert(key.to_string(), self.lines.len());
                self.lines.push(line);
            }
        }
    }

    /// Sets the line under `key` to exactly `quantity`, creating it if needed.
    pub fn set(&mut self, key: &str, name: &str, kind: TileLineKind, quantity: i64) {
        match self.index.get(key) {
            Some(&position) => self.lines[position].quantity = quantity,
            None => self.add(key, name, kind, quantity),
        }
    }

    /// Removes up to `quantity` units from an existing line, never going below zero.
    ///
    /// Returns the number of units actually removed.
    pub fn subtract_saturating(&mut self, key: &str, quantity: i64) -> i64 {
        match self.index.get(key) {
            Some(&position) => {
                let line = &mut self.lines[position];
                let removed = quantity.min(line.quantity).max(0);
                line.quantity -= removed;
                removed
            }
            None => 0,
        }
    }

    pub fn get(&self, key: &str) -> Option<&TileQuantityLine> {
        self.index.get(key).map(|&position| &self.lines[position])
    }

    /// Quantity under `key`, if the line exists.
    pub fn quantity(&self, key: &str) -> Option<i64> {
        self.get(key).map(|line| line.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines of one kind.
    pub fn total_of_kind(&self, kind: TileLineKind) -> i64 {
        self.lines
            .iter()
            .filter(|line| line.kind == kind)
            .fold(0, |total: i64, line| total.saturating_add(line.quantity))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileQuantityLine> {
        self.lines.iter()
    }

    /// Consumes the ledger, returning lines in first-seen order.
    pub fn into_lines(self) -> Vec<TileQuantityLine> {
        self.lines
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
