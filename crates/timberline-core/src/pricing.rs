//! # Pricing Module
//!
//! Derives the full set of price fields for a product variant from either a
//! pre-tax base price or a GST-inclusive selling price.
//!
//! ## Price Fields
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base ──(× gst%)──► gst_amount                                          │
//! │    │                    │                                               │
//! │    └────────(+)─────────┴──► selling_price   (what the customer pays)  │
//! │                                    │                                    │
//! │  listing_price (strike-through) ───┤                                    │
//! │                                    ▼                                    │
//! │                     savings = listing - selling                         │
//! │                     discount_percent = savings / listing × 100          │
//! │                                                                         │
//! │  listing_price < selling_price is never shown: it collapses to selling │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Every currency output goes through [`round2`], which is
//! `round_half_up(value × 100) / 100` on `f64`. Ties go toward positive
//! infinity, so `-2.675` rounds to `-2.67`. Values whose binary form sits
//! just below a tie round down (`1.005` becomes `1.00`). Aggregation across
//! lines uses integer [`Money`](crate::money::Money) instead.
//!
//! ## Missing Inputs
//! Every operation is total. `None`, NaN and infinite inputs are treated as
//! zero by [`coerce_amount`]; range checks live in
//! [`validation`](crate::validation). Derived amounts get the same rule: a
//! rate of `-100` (division by zero) or an amount that overflows `f64`
//! yields zero for that field, never NaN or ∞.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Pricing Result
// =============================================================================

/// Normalized price fields for one variant.
///
/// ## Invariants
/// - `selling_price == round2(base + gst_amount)`
/// - `listing_price >= selling_price`
/// - `savings == 0` and `discount_percent == 0` whenever
///   `listing_price <= selling_price`
///
/// Serialized with camelCase keys, the shape stored on variant records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Pre-tax base price.
    pub base: f64,
    /// GST charged on the base price.
    pub gst_amount: f64,
    /// Reference price shown with strike-through.
    pub listing_price: f64,
    /// GST-inclusive price the customer pays.
    pub selling_price: f64,
    /// `listing_price - selling_price`, never negative.
    pub savings: f64,
    /// Whole-number discount relative to the listing price.
    #[ts(type = "number")]
    pub discount_percent: i64,
}

impl PricingResult {
    /// Returns true if the listing price is shown as a real discount.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }
}

/// Listing price, savings and percent after collapsing non-discounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DiscountBreakdown {
    pub listing_price: f64,
    pub savings: f64,
    pub discount_percent: i64,
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to the nearest integer, ties toward positive infinity.
#[inline]
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds a currency value to 2 decimal places.
///
/// ## Example
/// ```rust
/// use timberline_core::pricing::round2;
///
/// assert_eq!(round2(179.994), 179.99);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(round2(42.4242)), round2(42.4242));
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// [`round2`] with non-finite results treated as zero.
#[inline]
fn round2_finite(value: f64) -> f64 {
    coerce_amount(Some(round2(value)))
}

/// Turns an optional numeric input into a usable amount.
///
/// `None`, NaN and ±∞ become `0.0`. Zero and negative values pass through
/// unchanged.
#[inline]
pub fn coerce_amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

// =============================================================================
// Discount
// =============================================================================

/// Whole-number discount percentage of `selling_price` against `listing_price`.
///
/// Returns 0 when the listing price is zero or NaN, or is not above the
/// selling price.
///
/// ## Example
/// ```rust
/// use timberline_core::pricing::calc_discount_percent;
///
/// // (1500 - 1180) / 1500 = 21.33%
/// assert_eq!(calc_discount_percent(1500.0, 1180.0), 21);
/// assert_eq!(calc_discount_percent(1000.0, 1180.0), 0);
/// ```
pub fn calc_discount_percent(listing_price: f64, selling_price: f64) -> i64 {
    if listing_price == 0.0 || listing_price.is_nan() || listing_price <= selling_price {
        return 0;
    }

    let raw = (listing_price - selling_price) / listing_price * 100.0;
    round_half_up(raw) as i64
}

/// Collapses a listing price at or below the selling price.
pub(crate) fn normalize_discount(listing_price: f64, selling_price: f64) -> DiscountBreakdown {
    if listing_price <= selling_price {
        return DiscountBreakdown {
            listing_price: selling_price,
            savings: 0.0,
            discount_percent: 0,
        };
    }

    DiscountBreakdown {
        listing_price,
        savings: round2_finite(listing_price - selling_price),
        discount_percent: calc_discount_percent(listing_price, selling_price),
    }
}

/// Listing price to normalize: the override if positive, else the selling price.
fn raw_listing_price(listing_price: Option<f64>, selling_price: f64) -> f64 {
    match listing_price.map(|listing| round2_finite(coerce_amount(Some(listing)))) {
        Some(listing) if listing > 0.0 => listing,
        _ => selling_price,
    }
}

fn finish(base: f64, gst_amount: f64, selling_price: f64, listing_price: Option<f64>) -> PricingResult {
    let discount = normalize_discount(raw_listing_price(listing_price, selling_price), selling_price);

    PricingResult {
        base,
        gst_amount,
        listing_price: discount.listing_price,
        selling_price,
        savings: discount.savings,
        discount_percent: discount.discount_percent,
    }
}

// =============================================================================
// Variant Pricing
// =============================================================================

/// Prices a variant forward from its pre-tax base price.
///
/// ## Arguments
/// * `base_price` - Pre-tax price; missing or non-finite means 0
/// * `gst_rate` - GST percent (`18.0` for 18%); missing or non-finite means 0
/// * `listing_price` - Optional strike-through price, honored only if > 0
///
/// ## Example
/// ```rust
/// use timberline_core::pricing::compute_variant_from_base;
///
/// let priced = compute_variant_from_base(Some(1000.0), Some(18.0), None);
/// assert_eq!(priced.gst_amount, 180.0);
/// assert_eq!(priced.selling_price, 1180.0);
/// // No override: listing equals selling, no discount shown
/// assert_eq!(priced.listing_price, 1180.0);
/// assert_eq!(priced.discount_percent, 0);
/// ```
pub fn compute_variant_from_base(
    base_price: Option<f64>,
    gst_rate: Option<f64>,
    listing_price: Option<f64>,
) -> PricingResult {
    let gst_rate = coerce_amount(gst_rate);
    let base = round2_finite(coerce_amount(base_price));
    let gst_amount = round2_finite(base * gst_rate / 100.0);
    let selling_price = round2_finite(base + gst_amount);

    finish(base, gst_amount, selling_price, listing_price)
}

/// Prices a variant backward from a GST-inclusive selling price.
///
/// The base is derived as `round2(selling / (1 + gst%))` and the selling price
/// is then recomputed from that base, so the returned `selling_price` can
/// differ from the input by 0.01:
///
/// ```text
/// 100.00 @ 18%  →  base 84.75  →  gst 15.26  →  selling 100.01
///  10.00 @ 18%  →  base  8.47  →  gst  1.52  →  selling   9.99
/// ```
///
/// ## Example
/// ```rust
/// use timberline_core::pricing::compute_variant_from_selling_price;
///
/// let priced = compute_variant_from_selling_price(Some(1180.0), Some(18.0), None);
/// assert_eq!(priced.base, 1000.0);
/// assert_eq!(priced.gst_amount, 180.0);
/// assert_eq!(priced.selling_price, 1180.0);
/// ```
pub fn compute_variant_from_selling_price(
    selling_price: Option<f64>,
    gst_rate: Option<f64>,
    listing_price: Option<f64>,
) -> PricingResult {
    let gst_rate = coerce_amount(gst_rate);
    let gst_factor = 1.0 + gst_rate / 100.0;
    let candidate = round2_finite(coerce_amount(selling_price));
    let base = round2_finite(candidate / gst_factor);
    let gst_amount = round2_finite(base * gst_rate / 100.0);
    let selling_price = round2_finite(base + gst_amount);

    finish(base, gst_amount, selling_price, listing_price)
}

// =============================================================================
// Unit Tests
// =============================================================================
