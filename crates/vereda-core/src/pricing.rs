//! # Price Table
//!
//! Read-only view over the caller's material prices.
//!
//! ```text
//!   price_for("CEMENT")
//!     1. entry whose type == "CEMENT"                 ──► its price
//!     2. entry whose name contains "cement" (any case) ──► its price
//!     3. nothing                                       ──► $0.00
//!
//!   bag_weight("CEMENT", 50.0)
//!     entry whose type == "CEMENT" with bag_weight > 0 ──► that weight
//!     otherwise                                        ──► 50.0
//! ```
//!
//! Seed data types are free text, so the name fallback catches entries like
//! `{ type: "OTHER", name: "Arena gruesa (sand)" }`. Exact type always wins,
//! so `WHITE_CEMENT` entries never shadow `CEMENT`.

use tracing::trace;

use crate::money::Money;
use crate::types::MaterialPriceEntry;

/// Material type codes used in the price table.
pub mod material_type {
    pub const ADHESIVE: &str = "ADHESIVE";
    pub const CEMENT: &str = "CEMENT";
    pub const SAND: &str = "SAND";
    /// Gravel is priced as stone.
    pub const STONE: &str = "STONE";
    pub const WHITE_CEMENT: &str = "WHITE_CEMENT";
    pub const MARMOLINA: &str = "MARMOLINA";
    pub const WIRE_MESH: &str = "WIRE_MESH";
    pub const WATERPROOFING: &str = "WATERPROOFING";
    pub const GEOMEMBRANE: &str = "GEOMEMBRANE";
    pub const ELECTROWELDED_MESH: &str = "ELECTROWELDED_MESH";
}

/// Lenient lookups over a material price list.
#[derive(Debug, Clone, Copy)]
pub struct PriceTable<'a> {
    entries: &'a [MaterialPriceEntry],
}

impl<'a> PriceTable<'a> {
    pub fn new(entries: &'a [MaterialPriceEntry]) -> Self {
        PriceTable { entries }
    }

    /// Entry for a material type: exact type match, else case-insensitive
    /// substring on the entry name.
    pub fn find(&self, material_type: &str) -> Option<&'a MaterialPriceEntry> {
        if let Some(entry) = self.find_exact(material_type) {
            return Some(entry);
        }

        let needle = material_type.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase().contains(&needle))
    }

    /// Entry whose type equals `material_type` exactly.
    pub fn find_exact(&self, material_type: &str) -> Option<&'a MaterialPriceEntry> {
        self.entries
            .iter()
            .find(|entry| entry.material_type == material_type)
    }

    /// Unit price for a material type, zero when nothing matches.
    pub fn price_for(&self, material_type: &str) -> Money {
        match self.find(material_type) {
            Some(entry) => entry.price(),
            None => {
                trace!(material_type, "No price for material; costing at zero");
                Money::zero()
            }
        }
    }

    /// Bag weight (kg) for a bagged material, or `fallback`.
    ///
    /// Only an exact type match counts, and a weight of zero is missing.
    pub fn bag_weight(&self, material_type: &str, fallback: f64) -> f64 {
        self.find_exact(material_type)
            .and_then(|entry| entry.bag_weight)
            .filter(|weight| *weight > 0.0)
            .unwrap_or(fallback)
    }
}

/// `bolsas de 25kg`, `bolsas de 42.5kg`.
pub fn bag_unit(bag_weight_kg: f64) -> String {
    format!("bolsas de {}kg", crate::types::format_decimal(bag_weight_kg))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(material_type: &str, name: &str, cents: i64, bag_weight: Option<f64>) -> MaterialPriceEntry {
        MaterialPriceEntry {
            material_type: material_type.to_string(),
            name: name.to_string(),
            price_per_unit_cents: cents,
            unit: String::new(),
            bag_weight,
        }
    }

    #[test]
    fn test_exact_type_wins_over_name() {
        let entries = vec![
            entry("WHITE_CEMENT", "Cemento blanco (white cement)", 900, Some(25.0)),
            entry("CEMENT", "Cemento gris", 700, Some(42.5)),
        ];
        let table = PriceTable::new(&entries);
        assert_eq!(table.price_for("CEMENT"), Money::from_cents(700));
        assert_eq!(table.price_for("WHITE_CEMENT"), Money::from_cents(900));
    }

    #[test]
    fn test_name_substring_fallback() {
        let entries = vec![entry("OTHER", "Arena SAND gruesa", 1500, None)];
        let table = PriceTable::new(&entries);
        assert_eq!(table.price_for("SAND"), Money::from_cents(1500));
        assert_eq!(table.price_for("sand"), Money::from_cents(1500));
    }

    #[test]
    fn test_missing_price_is_zero() {
        let table = PriceTable::new(&[]);
        assert_eq!(table.price_for("ADHESIVE"), Money::zero());
        assert!(table.find("").is_none());
    }

    #[test]
    fn test_bag_weight_exact_only() {
        let entries = vec![
            entry("OTHER", "cement bag", 700, Some(42.5)),
            entry("MARMOLINA", "Marmolina", 300, Some(0.0)),
            entry("WHITE_CEMENT", "Blanco", 900, Some(20.0)),
        ];
        let table = PriceTable::new(&entries);
        assert_eq!(table.bag_weight("CEMENT", 50.0), 50.0);
        assert_eq!(table.bag_weight("MARMOLINA", 30.0), 30.0);
        assert_eq!(table.bag_weight("WHITE_CEMENT", 25.0), 20.0);
    }

    #[test]
    fn test_bag_unit() {
        assert_eq!(bag_unit(50.0), "bolsas de 50kg");
        assert_eq!(bag_unit(42.5), "bolsas de 42.5kg");
    }
}
