//! # Money Module
//!
//! Provides the `Money` type: an amount in paise (1/100 rupee) stored as `i64`.
//!
//! ## Where Money Is Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pricing::PricingResult (f64, 2dp)                                      │
//! │        │                                                                │
//! │        │  Money::from_amount()   ← once per variant                     │
//! │        ▼                                                                │
//! │  CartLine.selling_price × quantity ──► CartTotals.subtotal (Money)      │
//! │                                                                         │
//! │  Summing f64 prices across many lines accumulates representation error │
//! │  (0.1 + 0.2 = 0.30000000000000004). Summing paise does not.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use timberline_core::money::Money;
//!
//! let price = Money::from_amount(1180.0);
//! assert_eq!(price.paise(), 118_000);
//!
//! let total = price * 3 + Money::from_paise(50);
//! assert_eq!(total.to_string(), "₹3540.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::pricing::round_half_up;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise.
///
/// ## Design Decisions
/// - **i64 (signed)**: differences (savings, refunds) can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as the paise integer**: the storefront formats it
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from paise.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Converts a 2-decimal rupee amount (as produced by the pricing engine)
    /// to paise, rounding half up on the paisa.
    ///
    /// Non-finite amounts convert to zero.
    ///
    /// ## Example
    /// ```rust
    /// use timberline_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(1679.44).paise(), 167_944);
    /// assert_eq!(Money::from_amount(0.1 + 0.2).paise(), 30);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        Money(round_half_up(amount * 100.0) as i64)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the amount in rupees as `f64`, for handing back to the engine
    /// or to JSON consumers expecting a decimal.
    #[inline]
    pub fn to_amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole rupees portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, `None` on overflow.
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented display; the storefront does its own locale formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₹{}.{:02}",
            sign,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a line quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_variant_from_base;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(118_050);
        assert_eq!(money.paise(), 118_050);
        assert_eq!(money.rupees(), 1180);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_from_amount() {
        assert_eq!(Money::from_amount(1180.0).paise(), 118_000);
        assert_eq!(Money::from_amount(1679.44).paise(), 167_944);
        assert_eq!(Money::from_amount(0.01).paise(), 1);
        assert_eq!(Money::from_amount(-5.5).paise(), -550);
        assert_eq!(Money::from_amount(f64::NAN), Money::zero());
    }

    #[test]
    fn test_from_amount_absorbs_float_noise() {
        // 0.1 + 0.2 = 0.30000000000000004
        assert_eq!(Money::from_amount(0.1 + 0.2).paise(), 30);
        // 9.99 - 9.98 = 0.009999999999999787
        assert_eq!(Money::from_amount(9.99 - 9.98).paise(), 1);
    }

    #[test]
    fn test_round_trip_with_engine_output() {
        let r = compute_variant_from_base(Some(24999.0), Some(18.0), Some(35000.0));
        let selling = Money::from_amount(r.selling_price);
        assert_eq!(selling.paise(), 2_949_882);
        assert_eq!(selling.to_amount(), r.selling_price);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(118_000).to_string(), "₹1180.00");
        assert_eq!(Money::from_paise(599).to_string(), "₹5.99");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_paise(200);
        assert_eq!(c.paise(), 1300);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5]
            .into_iter()
            .map(Money::from_paise)
            .sum();
        assert_eq!(total.paise(), 355);
    }

    #[test]
    fn test_checked_mul_quantity() {
        assert_eq!(
            Money::from_paise(299).checked_mul_quantity(3),
            Some(Money::from_paise(897))
        );
        assert_eq!(Money::from_paise(i64::MAX).checked_mul_quantity(2), None);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_paise(-1).is_negative());
    }
}
