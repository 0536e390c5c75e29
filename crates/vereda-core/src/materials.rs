//! # Sidewalk Materials
//!
//! Turns the tiled area and the joint length into slab materials and surface
//! treatments, then prices them.
//!
//! ## Quantity Pipeline
//! ```text
//!   sidewalk area (m²) ─┬─► adhesive       area × rate             ceil   kg
//!                       ├─► slab volume    area × thickness / 100         m³
//!                       │     ├─► cement   volume × kg/m³ ÷ bag    ceil   bags
//!                       │     ├─► sand     volume × m³/m³          2 dp   m³
//!                       │     └─► gravel   volume × m³/m³          2 dp   m³
//!                       ├─► wire mesh      area × rate             ceil   m²
//!                       └─► waterproofing  area × rate × coats     ceil   kg
//!
//!   joint length (m) ───┬─► white cement   length × kg/m ÷ bag     ceil   bags
//!                       └─► marmolina      length × kg/m ÷ bag     ceil   bags
//! ```
//!
//! Cost is always the rounded quantity times the unit price. The three `*Kg`
//! lines are references for the bagged materials: they repeat the bagged cost
//! and are left out of the total.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::{bag_unit, material_type, PriceTable};
use crate::settings::CalculationSettings;
use crate::types::MaterialQuantityLine;
use crate::{FALLBACK_CEMENT_BAG_KG, FALLBACK_MARMOLINA_BAG_KG, FALLBACK_WHITE_CEMENT_BAG_KG};

// =============================================================================
// Rounding
// =============================================================================

/// Rounds up to a whole unit (bags, kg, m²).
#[inline]
pub fn round_up(value: f64) -> i64 {
    value.ceil() as i64
}

/// Rounds to two decimals, half away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Line for a discrete material: quantity rounded up, cost per unit.
pub(crate) fn whole_units_line(raw: f64, unit: &str, unit_price: Money) -> MaterialQuantityLine {
    let quantity = round_up(raw);
    MaterialQuantityLine::new(quantity as f64, unit, unit_price.multiply_quantity(quantity))
}

/// Line for a volume material: quantity to two decimals, cost from that.
pub(crate) fn volume_line(raw: f64, unit_price: Money) -> MaterialQuantityLine {
    let quantity = round2(raw);
    MaterialQuantityLine::new(quantity, "m³", unit_price.multiply_decimal(quantity))
}

/// A bagged material and its kg reference line, both carrying the bag cost.
pub fn bagged_lines(
    kg: f64,
    bag_weight_kg: f64,
    bag_price: Money,
) -> (MaterialQuantityLine, MaterialQuantityLine) {
    let bags = whole_units_line(kg / bag_weight_kg, &bag_unit(bag_weight_kg), bag_price);
    let reference = MaterialQuantityLine::new(round_up(kg) as f64, "kg", bags.cost);
    (bags, reference)
}

// =============================================================================
// Sidewalk Materials
// =============================================================================

/// Material lines of the sidewalk slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SidewalkMaterials {
    pub adhesive: MaterialQuantityLine,
    pub cement: MaterialQuantityLine,
    /// Reference only.
    pub cement_kg: MaterialQuantityLine,
    pub sand: MaterialQuantityLine,
    pub gravel: MaterialQuantityLine,
    pub white_cement: MaterialQuantityLine,
    /// Reference only.
    pub white_cement_kg: MaterialQuantityLine,
    pub marmolina: MaterialQuantityLine,
    /// Reference only.
    pub marmolina_kg: MaterialQuantityLine,
    pub wire_mesh: MaterialQuantityLine,
    pub waterproofing: MaterialQuantityLine,
}

impl SidewalkMaterials {
    /// Lines that make up the total, keyed by their serialized name.
    pub fn billable(&self) -> [(&'static str, &MaterialQuantityLine); 8] {
        [
            ("adhesive", &self.adhesive),
            ("cement", &self.cement),
            ("sand", &self.sand),
            ("gravel", &self.gravel),
            ("whiteCement", &self.white_cement),
            ("marmolina", &self.marmolina),
            ("wireMesh", &self.wire_mesh),
            ("waterproofing", &self.waterproofing),
        ]
    }

    /// Sum of the billable line costs.
    pub fn total_cost(&self) -> Money {
        self.billable().iter().map(|(_, line)| line.cost).sum()
    }
}

/// Computes the sidewalk material lines.
///
/// `joint_length_m` is the lineal length grouted with white cement and
/// marmolina (the perimeter extended by the additional rows).
pub fn calculate_sidewalk_materials(
    area_m2: f64,
    joint_length_m: f64,
    settings: &CalculationSettings,
    prices: &PriceTable<'_>,
) -> SidewalkMaterials {
    let adhesive_kg = area_m2 * settings.adhesive_kg_per_m2;
    let slab_volume_m3 = area_m2 * settings.sidewalk_base_thickness_cm / 100.0;
    let cement_kg = slab_volume_m3 * settings.cement_kg_per_m3;
    let sand_m3 = slab_volume_m3 * settings.sand_m3_per_m3;
    let gravel_m3 = slab_volume_m3 * settings.gravel_m3_per_m3;
    let white_cement_kg = joint_length_m * settings.white_cement_kg_per_lineal_m;
    let marmolina_kg = joint_length_m * settings.marmolina_kg_per_lineal_m;
    let wire_mesh_m2 = area_m2 * settings.wire_mesh_m2_per_m2;
    let waterproofing_kg =
        area_m2 * settings.waterproofing_kg_per_m2 * f64::from(settings.waterproofing_coats);

    let cement_bag_kg = prices.bag_weight(material_type::CEMENT, FALLBACK_CEMENT_BAG_KG);
    let white_cement_bag_kg =
        prices.bag_weight(material_type::WHITE_CEMENT, FALLBACK_WHITE_CEMENT_BAG_KG);
    let marmolina_bag_kg = prices.bag_weight(material_type::MARMOLINA, FALLBACK_MARMOLINA_BAG_KG);

    debug!(
        area_m2,
        slab_volume_m3,
        joint_length_m,
        cement_bag_kg,
        "Computing sidewalk materials"
    );

    let (cement, cement_kg) =
        bagged_lines(cement_kg, cement_bag_kg, prices.price_for(material_type::CEMENT));
    let (white_cement, white_cement_kg) = bagged_lines(
        white_cement_kg,
        white_cement_bag_kg,
        prices.price_for(material_type::WHITE_CEMENT),
    );
    let (marmolina, marmolina_kg) = bagged_lines(
        marmolina_kg,
        marmolina_bag_kg,
        prices.price_for(material_type::MARMOLINA),
    );

    SidewalkMaterials {
        adhesive: whole_units_line(adhesive_kg, "kg", prices.price_for(material_type::ADHESIVE)),
        cement,
        cement_kg,
        sand: volume_line(sand_m3, prices.price_for(material_type::SAND)),
        gravel: volume_line(gravel_m3, prices.price_for(material_type::STONE)),
        white_cement,
        white_cement_kg,
        marmolina,
        marmolina_kg,
        wire_mesh: whole_units_line(wire_mesh_m2, "m²", prices.price_for(material_type::WIRE_MESH)),
        waterproofing: whole_units_line(
            waterproofing_kg,
            "kg",
            prices.price_for(material_type::WATERPROOFING),
        ),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MaterialPriceEntry;

    fn price(material_type: &str, cents: i64, bag_weight: Option<f64>) -> MaterialPriceEntry {
        MaterialPriceEntry {
            material_type: material_type.to_string(),
            name: material_type.to_lowercase(),
            price_per_unit_cents: cents,
            unit: String::new(),
            bag_weight,
        }
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_up(0.0), 0);
        assert_eq!(round_up(0.01), 1);
        assert_eq!(round_up(3.0), 3);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(1.234), 1.23);
    }

    #[test]
    fn test_zero_area_and_joints_give_zero_everything() {
        let table = PriceTable::new(&[]);
        let materials = calculate_sidewalk_materials(0.0, 0.0, &CalculationSettings::default(), &table);
        for (_, line) in materials.billable() {
            assert_eq!(line.quantity, 0.0);
            assert!(line.cost.is_zero());
        }
        assert_eq!(materials.cement.unit, "bolsas de 50kg");
        assert_eq!(materials.total_cost(), Money::zero());
    }

    #[test]
    fn test_quantities_with_defaults() {
        let table = PriceTable::new(&[]);
        // 10 m² sidewalk, 20 m of joints
        let m = calculate_sidewalk_materials(10.0, 20.0, &CalculationSettings::default(), &table);

        assert_eq!(m.adhesive.quantity, 50.0);
        // volume 1 m³ → 350 kg → 7 bags of 50
        assert_eq!(m.cement.quantity, 7.0);
        assert_eq!(m.cement_kg.quantity, 350.0);
        assert_eq!(m.sand.quantity, 0.5);
        assert_eq!(m.gravel.quantity, 0.8);
        // 20 × 0.5 = 10 kg → 1 bag of 25; 20 × 0.3 = 6 kg → 1 bag of 30
        assert_eq!(m.white_cement.quantity, 1.0);
        assert_eq!(m.white_cement_kg.quantity, 10.0);
        assert_eq!(m.marmolina.quantity, 1.0);
        assert_eq!(m.marmolina_kg.quantity, 6.0);
        assert_eq!(m.wire_mesh.quantity, 10.0);
        assert_eq!(m.waterproofing.quantity, 30.0);
        assert_eq!(m.waterproofing.unit, "kg");
        assert_eq!(m.wire_mesh.unit, "m²");
    }

    #[test]
    fn test_costs_use_rounded_quantities() {
        let entries = vec![
            price("ADHESIVE", 200, None),
            price("CEMENT", 8000, Some(25.0)),
            price("SAND", 30000, None),
            price("STONE", 40000, None),
        ];
        let table = PriceTable::new(&entries);
        // 3.3 m² → adhesive 16.5 kg → 17
        let m = calculate_sidewalk_materials(3.3, 0.0, &CalculationSettings::default(), &table);

        assert_eq!(m.adhesive.quantity, 17.0);
        assert_eq!(m.adhesive.cost, Money::from_cents(3400));

        // volume 0.33 m³ → 115.5 kg → 5 bags of 25kg
        assert_eq!(m.cement.unit, "bolsas de 25kg");
        assert_eq!(m.cement.quantity, 5.0);
        assert_eq!(m.cement.cost, Money::from_cents(40000));
        assert_eq!(m.cement_kg.quantity, 116.0);
        assert_eq!(m.cement_kg.cost, m.cement.cost);

        // sand 0.165 → 0.17 m³ (not 0.165 × price)
        assert_eq!(m.sand.quantity, 0.17);
        assert_eq!(m.sand.cost, Money::from_cents(5100));
        // gravel 0.264 → 0.26 m³, priced as STONE
        assert_eq!(m.gravel.quantity, 0.26);
        assert_eq!(m.gravel.cost, Money::from_cents(10400));
    }

    #[test]
    fn test_total_excludes_reference_lines() {
        let entries = vec![
            price("CEMENT", 1000, None),
            price("WHITE_CEMENT", 500, None),
            price("MARMOLINA", 300, None),
        ];
        let table = PriceTable::new(&entries);
        let m = calculate_sidewalk_materials(10.0, 20.0, &CalculationSettings::default(), &table);

        // 7 cement bags + 1 white cement bag + 1 marmolina bag
        assert_eq!(m.total_cost(), Money::from_cents(7000 + 500 + 300));
    }

    #[test]
    fn test_serialized_keys() {
        let table = PriceTable::new(&[]);
        let m = calculate_sidewalk_materials(1.0, 1.0, &CalculationSettings::default(), &table);
        let json = serde_json::to_value(&m).unwrap();
        for key in [
            "adhesive",
            "cement",
            "cementKg",
            "sand",
            "gravel",
            "whiteCement",
            "whiteCementKg",
            "marmolina",
            "marmolinaKg",
            "wireMesh",
            "waterproofing",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
