//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use vereda_core::{
    CalculationSettings, MaterialPriceEntry, PoolGeometry, TileCatalogEntry, TileConfiguration,
    TilingEstimate,
};

pub const TILE_50: &str = "tile-50x50";

/// Long side 5.0 m east–west, short side 2.5 m north–south.
pub fn pool() -> PoolGeometry {
    PoolGeometry::new(2.5, 5.0)
}

pub fn catalog() -> Vec<TileCatalogEntry> {
    vec![
        TileCatalogEntry {
            id: TILE_50.to_string(),
            name: "Loseta Atérmica".to_string(),
            width_cm: 50.0,
            length_cm: 50.0,
            price_per_unit_cents: 250000,
        },
        TileCatalogEntry {
            id: "tile-40x60".to_string(),
            name: "Loseta Rectangular".to_string(),
            width_cm: 40.0,
            length_cm: 60.0,
            price_per_unit_cents: 300000,
        },
    ]
}

pub fn price(material_type: &str, name: &str, cents: i64, bag_weight: Option<f64>) -> MaterialPriceEntry {
    MaterialPriceEntry {
        material_type: material_type.to_string(),
        name: name.to_string(),
        price_per_unit_cents: cents,
        unit: String::new(),
        bag_weight,
    }
}

/// A seed-like price list.
pub fn prices() -> Vec<MaterialPriceEntry> {
    vec![
        price("ADHESIVE", "Adhesivo cerámico", 150, None),
        price("CEMENT", "Cemento gris", 720000, Some(25.0)),
        price("SAND", "Arena gruesa", 2500000, None),
        price("STONE", "Piedra chancada", 3000000, None),
        price("WHITE_CEMENT", "Cemento blanco", 900000, Some(25.0)),
        price("MARMOLINA", "Marmolina", 650000, Some(30.0)),
        price("WIRE_MESH", "Malla acma", 180000, None),
        price("WATERPROOFING", "Impermeabilizante", 420000, None),
        price("GEOMEMBRANE", "Geomembrana", 350000, None),
        price("ELECTROWELDED_MESH", "Malla electrosoldada", 280000, None),
    ]
}

pub fn estimate(config: &TileConfiguration) -> TilingEstimate {
    vereda_core::estimate_tiling(
        &pool(),
        config,
        &catalog(),
        &CalculationSettings::default(),
        &prices(),
    )
}
