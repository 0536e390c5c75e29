//! # Money
//!
//! Integer-cent currency for unit prices and line costs.
//!
//! ```text
//!   unit price (cents) × whole quantity   ──► exact           (bags, kg, m²)
//!   unit price (cents) × m³ to 2 decimals ──► rounded to cent (sand, gravel)
//!                          │
//!                          ▼
//!   line costs ──Σ──► totalMaterialCost     (integer sum, no drift)
//! ```
//!
//! ## Usage
//! ```rust
//! use vereda_core::money::Money;
//!
//! let bag_price = Money::from_cents(1_250_00); // $1250.00 per cement bag
//! let cost = bag_price.multiply_quantity(7);   // 7 bags
//! assert_eq!(cost.cents(), 8_750_00);
//!
//! // Continuous quantities (m³) round to the nearest cent
//! let sand = Money::from_cents(30_000_00).multiply_decimal(0.36);
//! assert_eq!(sand.cents(), 10_800_00);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// MaterialPriceEntry.price_per_unit_cents ──► PriceTable::price_for()
///                                                   │
///            rounded quantity × price ◄─────────────┘
///                     │
///                     ▼
///     MaterialQuantityLine.cost ──► TilingEstimate.total_material_cost
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a whole quantity (bags, kg, m²), saturating.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies a unit price by a fractional quantity (m³ of sand or gravel).
    ///
    /// The product is rounded half away from zero to whole cents. Callers pass
    /// the already-rounded display quantity so cost matches what is shown.
    pub fn multiply_decimal(&self, qty: f64) -> Self {
        Money((self.0 as f64 * qty).round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and tests. The host formats for the UI locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = [a, b, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), 1501);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let price = Money::from_cents(150000);
        assert_eq!(price.multiply_quantity(i64::MAX).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MAX) + price).cents(), i64::MAX);

        let total: Money = [Money::from_cents(i64::MAX), price].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_multiply_decimal_rounds_to_cents() {
        // 0.37 m³ × $123.45 = $45.6765 → $45.68
        let price = Money::from_cents(12345);
        assert_eq!(price.multiply_decimal(0.37).cents(), 4568);

        assert_eq!(price.multiply_decimal(0.0).cents(), 0);
        assert_eq!(Money::zero().multiply_decimal(12.5).cents(), 0);
    }
}
