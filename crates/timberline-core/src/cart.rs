//! # Cart Module
//!
//! Aggregates priced variants into cart totals.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartLine (f64 prices from PricingResult, quantity)                     │
//! │        │                                                                │
//! │        │  validate quantity, convert once to Money                      │
//! │        ▼                                                                │
//! │  selling × qty ──► subtotal                                             │
//! │  listing × qty ──► listing_total    (listing never below selling)       │
//! │                    total_savings = listing_total - subtotal             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All sums happen in paise. An empty cart is valid and totals to zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_amount, validate_cart_size, validate_listing_price, validate_quantity,
};
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One variant in a cart, carrying the prices the engine produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub variant_id: String,
    pub sku: String,
    #[ts(type = "number")]
    pub quantity: i64,
    /// Price per unit, GST inclusive.
    pub selling_price: f64,
    /// Strike-through price per unit, if the variant shows one.
    #[serde(default)]
    pub listing_price: Option<f64>,
}

impl CartLine {
    /// Unit selling price in paise.
    pub fn unit_price(&self) -> Money {
        Money::from_amount(self.selling_price)
    }

    /// Unit listing price in paise, clamped so it never falls below the
    /// selling price.
    pub fn unit_listing_price(&self) -> Money {
        let selling = self.unit_price();
        match self.listing_price {
            Some(listing) if listing.is_finite() && listing > 0.0 => {
                Money::from_amount(listing).max(selling)
            }
            _ => selling,
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Totals across all cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    #[ts(type = "number")]
    pub line_count: usize,
    /// Sum of quantities.
    #[ts(type = "number")]
    pub item_count: i64,
    /// What the customer pays (GST inclusive).
    pub subtotal: Money,
    /// What the cart would cost at strike-through prices.
    pub listing_total: Money,
    /// `listing_total - subtotal`, never negative.
    pub total_savings: Money,
}

impl CartTotals {
    pub fn has_savings(&self) -> bool {
        self.total_savings.paise() > 0
    }
}

/// Computes cart totals.
///
/// ## Errors
/// - `CartTooLarge` when there are more than `MAX_CART_LINES` lines
/// - `QuantityTooLarge` when a line asks for more than `MAX_ITEM_QUANTITY`
/// - `Validation` for a non-positive quantity or a bad price
///
/// ## Example
/// ```rust
/// use timberline_core::cart::{compute_totals, CartLine};
///
/// let lines = vec![CartLine {
///     variant_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
///     sku: "SOFA-3S-TEAK".to_string(),
///     quantity: 2,
///     selling_price: 29498.82,
///     listing_price: Some(35000.0),
/// }];
///
/// let totals = compute_totals(&lines).unwrap();
/// assert_eq!(totals.subtotal.paise(), 5_899_764);
/// assert_eq!(totals.total_savings.paise(), 1_100_236);
/// ```
pub fn compute_totals(lines: &[CartLine]) -> CoreResult<CartTotals> {
    validate_cart_size(lines.len()).map_err(|_| CoreError::CartTooLarge {
        max: MAX_CART_LINES,
    })?;

    let mut totals = CartTotals {
        line_count: lines.len(),
        ..CartTotals::default()
    };

    for line in lines {
        check_line(line)?;

        totals.item_count += line.quantity;
        totals.subtotal =
            checked_add(totals.subtotal, line_amount(line.unit_price(), line)?)?;
        totals.listing_total = checked_add(
            totals.listing_total,
            line_amount(line.unit_listing_price(), line)?,
        )?;
    }

    totals.total_savings = totals.listing_total - totals.subtotal;
    Ok(totals)
}

fn check_line(line: &CartLine) -> CoreResult<()> {
    if line.quantity > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            sku: line.sku.clone(),
            requested: line.quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }
    validate_quantity(line.quantity)?;

    validate_amount("selling_price", Some(line.selling_price))?;
    validate_listing_price(line.listing_price)?;
    Ok(())
}

fn price_overflow() -> CoreError {
    ValidationError::OutOfRange {
        field: "selling_price".to_string(),
        min: 0.0,
        max: (i64::MAX / 100 / MAX_ITEM_QUANTITY) as f64,
    }
    .into()
}

fn line_amount(unit: Money, line: &CartLine) -> CoreResult<Money> {
    unit.checked_mul_quantity(line.quantity)
        .ok_or_else(price_overflow)
}

fn checked_add(a: Money, b: Money) -> CoreResult<Money> {
    a.paise()
        .checked_add(b.paise())
        .map(Money::from_paise)
        .ok_or_else(price_overflow)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{compute_variant_from_base, compute_variant_from_selling_price};

    fn line(sku: &str, quantity: i64, selling: f64, listing: Option<f64>) -> CartLine {
        CartLine {
            variant_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            sku: sku.to_string(),
            quantity,
            selling_price: selling,
            listing_price: listing,
        }
    }

    #[test]
    fn test_empty_cart_totals_to_zero() {
        let totals = compute_totals(&[]).unwrap();
        assert_eq!(totals, CartTotals::default());
        assert!(!totals.has_savings());
    }

    #[test]
    fn test_single_line_with_discount() {
        let totals = compute_totals(&[line("SOFA-3S", 1, 1180.0, Some(1500.0))]).unwrap();
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.subtotal.paise(), 118_000);
        assert_eq!(totals.listing_total.paise(), 150_000);
        assert_eq!(totals.total_savings.paise(), 32_000);
        assert!(totals.has_savings());
    }

    #[test]
    fn test_lines_from_engine_output() {
        let bed = compute_variant_from_base(Some(1499.5), Some(12.0), Some(2999.0));
        let table = compute_variant_from_selling_price(Some(29499.0), Some(18.0), Some(39999.0));

        let lines = vec![
            line("BED-KING", 2, bed.selling_price, Some(bed.listing_price)),
            line("DT-SHEESHAM-6", 1, table.selling_price, Some(table.listing_price)),
        ];
        let totals = compute_totals(&lines).unwrap();

        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.item_count, 3);
        // 1679.44 × 2 + 29499.00
        assert_eq!(totals.subtotal.paise(), 3_285_788);
        // 2999.00 × 2 + 39999.00
        assert_eq!(totals.listing_total.paise(), 4_599_700);
        assert_eq!(totals.total_savings.paise(), 1_313_912);
    }

    #[test]
    fn test_listing_below_selling_gives_no_savings() {
        let err = compute_totals(&[
            line("CHAIR-01", 4, 500.0, Some(400.0)),
            line("CHAIR-03", 1, 250.0, Some(f64::NAN)),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let totals = compute_totals(&[
            line("CHAIR-01", 4, 500.0, Some(400.0)),
            line("CHAIR-02", 1, 250.0, None),
            line("CHAIR-03", 1, 250.0, Some(0.0)),
        ])
        .unwrap();
        assert_eq!(totals.subtotal.paise(), 250_000);
        assert_eq!(totals.listing_total, totals.subtotal);
        assert!(totals.total_savings.is_zero());
    }

    #[test]
    fn test_float_noise_does_not_accumulate() {
        let lines: Vec<CartLine> = (0..10)
            .map(|i| line(&format!("CUSHION-{i}"), 1, 0.1, None))
            .collect();
        let totals = compute_totals(&lines).unwrap();
        assert_eq!(totals.subtotal.paise(), 100);
        assert_eq!(totals.subtotal.to_amount(), 1.0);
    }

    #[test]
    fn test_cart_too_large() {
        let lines: Vec<CartLine> = (0..=MAX_CART_LINES)
            .map(|i| line(&format!("SKU-{i}"), 1, 10.0, None))
            .collect();
        assert!(matches!(
            compute_totals(&lines),
            Err(CoreError::CartTooLarge { max: 100 })
        ));

        assert!(compute_totals(&lines[..MAX_CART_LINES]).is_ok());
    }

    #[test]
    fn test_quantity_limits() {
        let err = compute_totals(&[line("DT-SHEESHAM-6", 1200, 100.0, None)]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::QuantityTooLarge {
                requested: 1200,
                max: 999,
                ..
            }
        ));

        let err = compute_totals(&[line("DT-SHEESHAM-6", 0, 100.0, None)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::MustBePositive { .. })));

        assert!(compute_totals(&[line("DT-SHEESHAM-6", 999, 100.0, None)]).is_ok());
    }

    #[test]
    fn test_invalid_selling_price() {
        let err = compute_totals(&[line("SOFA", 1, -1.0, None)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Negative { .. })));

        let err = compute_totals(&[line("SOFA", 1, f64::INFINITY, None)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::NotFinite { .. })));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = compute_totals(&[line("SOFA", 999, 1e17, None)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"{"variantId":"v1","sku":"SOFA","quantity":2,"sellingPrice":1180.0}"#;
        let parsed: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.listing_price, None);
        assert_eq!(parsed.quantity, 2);

        let totals = compute_totals(&[parsed]).unwrap();
        let value = serde_json::to_value(totals).unwrap();
        assert_eq!(value["subtotal"], 236_000);
        assert_eq!(value["itemCount"], 2);
        assert_eq!(value["totalSavings"], 0);
    }
}
