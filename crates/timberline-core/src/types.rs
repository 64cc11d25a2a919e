//! # Domain Types
//!
//! Types that carry pricing inputs in and pricing results out.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Back office variant form                                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  PriceQuoteRequest { mode, amount, gst_rate, listing_price }            │
//! │        │ validate() + quote()                                           │
//! │        ▼                                                                │
//! │  PricingResult ──► VariantPricing { sku, gst_rate, ..pricing }  (saved) │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  PriceDisplay::Discounted | PriceDisplay::Regular      (product page)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pricing::{compute_variant_from_base, compute_variant_from_selling_price, PricingResult};
use crate::validation::{
    validate_amount, validate_gst_rate, validate_listing_price, validate_sku, ValidationResult,
};

// =============================================================================
// Pricing Mode
// =============================================================================

/// Which price the merchant typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Amount is the pre-tax base price; GST is added on top.
    #[default]
    FromBase,
    /// Amount is the GST-inclusive selling price; the base is backed out.
    FromSellingPrice,
}

impl std::fmt::Display for PricingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingMode::FromBase => write!(f, "from_base"),
            PricingMode::FromSellingPrice => write!(f, "from_selling_price"),
        }
    }
}

// =============================================================================
// Price Quote Request
// =============================================================================

/// Raw pricing inputs as submitted by a variant form.
///
/// All numeric fields are optional; [`quote`](Self::quote) treats missing
/// values as zero. Call [`validate`](Self::validate) first to reject inputs a
/// merchant should never save.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteRequest {
    #[serde(default)]
    pub mode: PricingMode,
    /// Base price or selling price, depending on `mode`.
    #[serde(default)]
    pub amount: Option<f64>,
    /// GST percent (e.g. `18.0`).
    #[serde(default)]
    pub gst_rate: Option<f64>,
    /// Optional strike-through price.
    #[serde(default)]
    pub listing_price: Option<f64>,
}

impl PriceQuoteRequest {
    /// Quote from a pre-tax base price.
    pub fn from_base(base: f64, gst_rate: f64) -> Self {
        PriceQuoteRequest {
            mode: PricingMode::FromBase,
            amount: Some(base),
            gst_rate: Some(gst_rate),
            listing_price: None,
        }
    }

    /// Quote from a GST-inclusive selling price.
    pub fn from_selling_price(selling: f64, gst_rate: f64) -> Self {
        PriceQuoteRequest {
            mode: PricingMode::FromSellingPrice,
            amount: Some(selling),
            gst_rate: Some(gst_rate),
            listing_price: None,
        }
    }

    /// Sets the strike-through listing price.
    pub fn with_listing_price(mut self, listing_price: f64) -> Self {
        self.listing_price = Some(listing_price);
        self
    }

    /// Fills in `gst_rate` when the form left it empty.
    pub fn or_gst_rate(mut self, default_rate: f64) -> Self {
        if self.gst_rate.is_none() {
            self.gst_rate = Some(default_rate);
        }
        self
    }

    /// Form-layer checks: amount required and non-negative, GST rate in
    /// range, listing price non-negative if given.
    pub fn validate(&self) -> ValidationResult<()> {
        let field = match self.mode {
            PricingMode::FromBase => "base_price",
            PricingMode::FromSellingPrice => "selling_price",
        };
        validate_amount(field, self.amount)?;
        if let Some(rate) = self.gst_rate {
            validate_gst_rate(rate)?;
        }
        validate_listing_price(self.listing_price)?;
        Ok(())
    }

    /// Runs the pricing engine for this request.
    ///
    /// ## Example
    /// ```rust
    /// use timberline_core::types::PriceQuoteRequest;
    ///
    /// let priced = PriceQuoteRequest::from_selling_price(1180.0, 18.0).quote();
    /// assert_eq!(priced.base, 1000.0);
    /// ```
    pub fn quote(&self) -> PricingResult {
        match self.mode {
            PricingMode::FromBase => {
                compute_variant_from_base(self.amount, self.gst_rate, self.listing_price)
            }
            PricingMode::FromSellingPrice => {
                compute_variant_from_selling_price(self.amount, self.gst_rate, self.listing_price)
            }
        }
    }
}

// =============================================================================
// Variant Pricing
// =============================================================================

/// The pricing fields persisted on a product variant.
///
/// The catalog stores these verbatim; carts and orders read `selling_price`
/// from here instead of re-deriving tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VariantPricing {
    /// Variant SKU.
    pub sku: String,
    /// GST percent the variant was priced at.
    pub gst_rate: f64,
    #[serde(flatten)]
    pub pricing: PricingResult,
}

impl VariantPricing {
    /// Validates and prices a variant in one step.
    ///
    /// A request without a GST rate is priced at 0%.
    pub fn price(sku: &str, request: &PriceQuoteRequest) -> ValidationResult<Self> {
        validate_sku(sku)?;
        request.validate()?;

        Ok(VariantPricing {
            sku: sku.trim().to_string(),
            gst_rate: request.gst_rate.unwrap_or(0.0),
            pricing: request.quote(),
        })
    }

    /// How the storefront should render this variant's price.
    pub fn display(&self) -> PriceDisplay {
        PriceDisplay::from(&self.pricing)
    }
}

// =============================================================================
// Price Display
// =============================================================================

/// Storefront rendering decision for a price.
///
/// ```text
/// Discounted:   ₹1,180   ~~₹1,500~~   21% off
/// Regular:      ₹1,180
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceDisplay {
    /// Listing price shown struck through next to the selling price.
    Discounted {
        listing: f64,
        selling: f64,
        savings: f64,
        #[ts(type = "number")]
        percent: i64,
    },
    /// Selling price shown alone.
    Regular { selling: f64 },
}

impl From<&PricingResult> for PriceDisplay {
    fn from(pricing: &PricingResult) -> Self {
        if pricing.has_discount() {
            PriceDisplay::Discounted {
                listing: pricing.listing_price,
                selling: pricing.selling_price,
                savings: pricing.savings,
                percent: pricing.discount_percent,
            }
        } else {
            PriceDisplay::Regular {
                selling: pricing.selling_price,
            }
        }
    }
}

impl PriceDisplay {
    /// The amount the customer pays, whichever way it is rendered.
    pub fn selling(&self) -> f64 {
        match self {
            PriceDisplay::Discounted { selling, .. } | PriceDisplay::Regular { selling } => *selling,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_pricing_mode_default() {
        assert_eq!(PricingMode::default(), PricingMode::FromBase);
        assert_eq!(PricingMode::FromSellingPrice.to_string(), "from_selling_price");
    }

    #[test]
    fn test_quote_dispatches_on_mode() {
        let forward = PriceQuoteRequest::from_base(1000.0, 18.0).quote();
        assert_eq!(forward.selling_price, 1180.0);

        let backward = PriceQuoteRequest::from_selling_price(1180.0, 18.0).quote();
        assert_eq!(backward.base, 1000.0);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_quote_with_listing_price() {
        let r = PriceQuoteRequest::from_base(1000.0, 18.0)
            .with_listing_price(1500.0)
            .quote();
        assert_eq!(r.discount_percent, 21);
    }

    #[test]
    fn test_or_gst_rate_only_fills_missing() {
        let req = PriceQuoteRequest {
            amount: Some(1000.0),
            ..Default::default()
        };
        assert_eq!(req.or_gst_rate(18.0).gst_rate, Some(18.0));

        let req = PriceQuoteRequest::from_base(1000.0, 5.0).or_gst_rate(18.0);
        assert_eq!(req.gst_rate, Some(5.0));
    }

    #[test]
    fn test_request_deserializes_from_form_json() {
        let req: PriceQuoteRequest = serde_json::from_str(
            r#"{"mode":"from_selling_price","amount":29499,"gstRate":18,"listingPrice":39999}"#,
        )
        .unwrap();
        assert_eq!(req.mode, PricingMode::FromSellingPrice);
        assert_eq!(req.amount, Some(29499.0));
        assert_eq!(req.listing_price, Some(39999.0));

        let req: PriceQuoteRequest = serde_json::from_str(r#"{"amount":500}"#).unwrap();
        assert_eq!(req.mode, PricingMode::FromBase);
        assert_eq!(req.gst_rate, None);
    }

    #[test]
    fn test_request_validation() {
        assert!(PriceQuoteRequest::from_base(1000.0, 18.0).validate().is_ok());

        let err = PriceQuoteRequest::default().validate().unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "base_price"));

        let err = PriceQuoteRequest::from_selling_price(-1.0, 18.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "selling_price");

        assert!(PriceQuoteRequest::from_base(1000.0, 180.0).validate().is_err());
        assert!(PriceQuoteRequest::from_base(1000.0, 18.0)
            .with_listing_price(-5.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_variant_pricing() {
        let req = PriceQuoteRequest::from_base(24999.0, 18.0).with_listing_price(35000.0);
        let variant = VariantPricing::price(" SOFA-3S-TEAK ", &req).unwrap();

        assert_eq!(variant.sku, "SOFA-3S-TEAK");
        assert_eq!(variant.gst_rate, 18.0);
        assert_eq!(variant.pricing.selling_price, 29498.82);
        assert_eq!(variant.pricing.savings, 5501.18);
        assert_eq!(variant.pricing.discount_percent, 16);
    }

    #[test]
    fn test_variant_pricing_rejects_bad_sku() {
        let req = PriceQuoteRequest::from_base(1000.0, 18.0);
        assert!(VariantPricing::price("", &req).is_err());
        assert!(VariantPricing::price("has space", &req).is_err());
    }

    #[test]
    fn test_variant_pricing_json_is_flat() {
        let req = PriceQuoteRequest::from_base(1000.0, 18.0);
        let variant = VariantPricing::price("CHAIR-01", &req).unwrap();
        let json = serde_json::to_value(&variant).unwrap();

        assert_eq!(json["sku"], "CHAIR-01");
        assert_eq!(json["gstRate"], 18.0);
        assert_eq!(json["sellingPrice"], 1180.0);
        assert_eq!(json["discountPercent"], 0);
    }

    #[test]
    fn test_display_discounted() {
        let r = PriceQuoteRequest::from_base(1000.0, 18.0)
            .with_listing_price(1500.0)
            .quote();
        let display = PriceDisplay::from(&r);
        assert_eq!(
            display,
            PriceDisplay::Discounted {
                listing: 1500.0,
                selling: 1180.0,
                savings: 320.0,
                percent: 21,
            }
        );
        assert_eq!(display.selling(), 1180.0);
    }

    #[test]
    fn test_display_regular() {
        let r = PriceQuoteRequest::from_base(1000.0, 18.0).quote();
        let display = PriceDisplay::from(&r);
        assert_eq!(display, PriceDisplay::Regular { selling: 1180.0 });

        let json = serde_json::to_value(display).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "regular", "selling": 1180.0 }));
    }

    /// Savings under half a percent are not advertised as a discount.
    #[test]
    fn test_display_sub_percent_savings_is_regular() {
        let r = PriceQuoteRequest::from_base(100.0, 0.0)
            .with_listing_price(100.005)
            .quote();
        assert_eq!(r.savings, 0.01);
        assert_eq!(PriceDisplay::from(&r), PriceDisplay::Regular { selling: 100.0 });
    }
}
