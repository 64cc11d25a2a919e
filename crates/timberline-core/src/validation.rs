//! # Validation Module
//!
//! Form-layer checks run before the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Variant form / cart UI (TypeScript)                          │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: pricing-api handler (Rust)                                   │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business range checks                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: pricing engine                                               │
//! │  └── Never fails: degenerate input → well-formed zero result           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use timberline_core::validation::{validate_gst_rate, validate_quantity};
//!
//! validate_gst_rate(18.0).unwrap();
//! validate_quantity(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_CART_LINES, MAX_GST_RATE, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Price Validators
// =============================================================================

fn validate_finite_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a required price amount (base or selling price).
///
/// ## Rules
/// - Must be present
/// - Must be a finite number
/// - Must be non-negative (zero is allowed for free items)
///
/// ## Example
/// ```rust
/// use timberline_core::validation::validate_amount;
///
/// assert!(validate_amount("base_price", Some(1000.0)).is_ok());
/// assert!(validate_amount("base_price", Some(0.0)).is_ok());
/// assert!(validate_amount("base_price", None).is_err());
/// assert!(validate_amount("base_price", Some(-1.0)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Option<f64>) -> ValidationResult<()> {
    let amount = amount.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })?;

    validate_finite_non_negative(field, amount)
}

/// Validates an optional listing (strike-through) price.
///
/// A listing price at or below the selling price is accepted: the engine
/// collapses it, so it simply shows no discount.
pub fn validate_listing_price(listing_price: Option<f64>) -> ValidationResult<()> {
    match listing_price {
        Some(listing) => validate_finite_non_negative("listing_price", listing),
        None => Ok(()),
    }
}

/// Validates a GST rate in percent.
///
/// ## Rules
/// - Must be finite
/// - Must be between 0 and 100
/// - Furniture is normally 12% or 18%, see [`STANDARD_GST_SLABS`](crate::STANDARD_GST_SLABS)
pub fn validate_gst_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "gst_rate".to_string(),
        });
    }

    if !(0.0..=MAX_GST_RATE).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "gst_rate".to_string(),
            min: 0.0,
            max: MAX_GST_RATE,
        });
    }

    Ok(())
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1.0,
            max: MAX_ITEM_QUANTITY as f64,
        });
    }

    Ok(())
}

/// Validates the number of lines in a cart.
pub fn validate_cart_size(lines: usize) -> ValidationResult<()> {
    if lines > MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0.0,
            max: MAX_CART_LINES as f64,
        });
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a variant SKU.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use timberline_core::validation::validate_sku;
///
/// assert!(validate_sku("SOFA-3S-TEAK").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a variant ID (UUID).
pub fn validate_variant_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "variant_id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "variant_id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("base_price", Some(0.0)).is_ok());
        assert!(validate_amount("base_price", Some(24999.0)).is_ok());

        assert!(matches!(
            validate_amount("base_price", None),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_amount("base_price", Some(f64::NAN)),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            validate_amount("base_price", Some(f64::INFINITY)),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            validate_amount("selling_price", Some(-0.01)),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_listing_price() {
        assert!(validate_listing_price(None).is_ok());
        assert!(validate_listing_price(Some(0.0)).is_ok());
        assert!(validate_listing_price(Some(1500.0)).is_ok());
        assert!(validate_listing_price(Some(-1.0)).is_err());
        assert!(validate_listing_price(Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_gst_rate() {
        for slab in crate::STANDARD_GST_SLABS {
            assert!(validate_gst_rate(slab).is_ok());
        }
        assert!(validate_gst_rate(100.0).is_ok());
        assert!(validate_gst_rate(2.5).is_ok());

        assert!(validate_gst_rate(-1.0).is_err());
        assert!(validate_gst_rate(100.5).is_err());
        assert!(validate_gst_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES + 1).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("SOFA-3S-TEAK").is_ok());
        assert!(validate_sku("bed_king_01").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_variant_id() {
        assert!(validate_variant_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_variant_id("").is_err());
        assert!(validate_variant_id("not-a-uuid").is_err());
    }
}
