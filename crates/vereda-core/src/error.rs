//! # Error Types
//!
//! Domain-specific error types for vereda-core.
//!
//! ## Where Errors Can Occur
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surfaces                                  │
//! │                                                                         │
//! │  estimate_tiling()          → NEVER fails (degrades to zero)           │
//! │                                                                         │
//! │  validation::*              → ValidationError (caller asked to check)  │
//! │  EstimateRequest::validate  → CoreError (tile lookups + validation)    │
//! │  EstimatorSettings::from_*  → CoreError::InvalidSettings               │
//! │  EstimateRequest::from_json → CoreError::InvalidRequest                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → host API error → UI warning       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (side, tile id, field)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::geometry::Side;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// Only raised by the checking surfaces. The estimate itself treats every
/// one of these conditions as "contributes nothing".
#[derive(Debug, Error)]
pub enum CoreError {
    /// A side asks for additional rows of a tile the catalog doesn't have.
    ///
    /// ## When This Occurs
    /// - The tile was removed from the catalog after the project was saved
    /// - The configuration was typed by hand with a wrong id
    #[error("Tile not found for {side} side: {tile_id}")]
    TileNotFound { side: Side, tile_id: String },

    /// The selected tile has a zero or negative dimension.
    #[error("Tile {tile_id} has invalid dimensions: {width_cm}x{length_cm}cm")]
    InvalidTileDimensions {
        tile_id: String,
        width_cm: f64,
        length_cm: f64,
    },

    /// A settings document could not be parsed.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// An estimate request document could not be parsed.
    #[error("Invalid estimate request: {0}")]
    InvalidRequest(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TileNotFound {
            side: Side::North,
            tile_id: "tile-50x50".to_string(),
        };
        assert_eq!(err.to_string(), "Tile not found for north side: tile-50x50");

        let err = CoreError::InvalidTileDimensions {
            tile_id: "broken".to_string(),
            width_cm: 0.0,
            length_cm: 50.0,
        };
        assert_eq!(
            err.to_string(),
            "Tile broken has invalid dimensions: 0x50cm"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "length".to_string(),
        };
        assert_eq!(err.to_string(), "length must be positive");

        let err = ValidationError::Required {
            field: "north.selectedTileId".to_string(),
        };
        assert_eq!(err.to_string(), "north.selectedTileId is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotFinite {
            field: "width".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
