//! # Route Handlers
//!
//! Every handler follows the same shape:
//!
//! ```text
//! JSON body ──► validation ──► timberline-core ──► JSON response
//!                   │
//!                   └── ApiError (400 / 422)
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use timberline_core::cart::compute_totals;
use timberline_core::pricing::calc_discount_percent;
use timberline_core::validation::{validate_amount, validate_sku, validate_variant_id};
use timberline_core::{
    CartLine, CartTotals, PriceDisplay, PriceQuoteRequest, PricingResult, VariantPricing,
};

use crate::error::ApiResult;
use crate::AppState;

// =============================================================================
// Request / Response Bodies
// =============================================================================

/// Response for `POST /api/v1/pricing/quote`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub pricing: PricingResult,
    pub display: PriceDisplay,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRequest {
    pub listing_price: f64,
    pub selling_price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    pub discount_percent: i64,
}

#[derive(Debug, Deserialize)]
pub struct VariantPricingRequest {
    pub sku: String,
    #[serde(flatten)]
    pub quote: PriceQuoteRequest,
}

/// Response for `POST /api/v1/variants/pricing`.
#[derive(Debug, Serialize, Deserialize)]
pub struct VariantPricingResponse {
    pub variant: VariantPricing,
    pub display: PriceDisplay,
}

#[derive(Debug, Deserialize)]
pub struct CartRequest {
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "pricing-api"
    }))
}

/// Prices one variant from either direction.
pub async fn quote(
    State(state): State<AppState>,
    payload: Result<Json<PriceQuoteRequest>, JsonRejection>,
) -> ApiResult<Json<QuoteResponse>> {
    let Json(request) = payload?;
    let request = request.or_gst_rate(state.config.default_gst_rate);
    request.validate()?;

    let pricing = request.quote();
    debug!(
        mode = %request.mode,
        amount = ?request.amount,
        gst_rate = ?request.gst_rate,
        selling_price = pricing.selling_price,
        "Quoted price"
    );

    Ok(Json(QuoteResponse {
        display: PriceDisplay::from(&pricing),
        pricing,
    }))
}

/// Discount percent for an arbitrary listing/selling pair.
pub async fn discount(
    payload: Result<Json<DiscountRequest>, JsonRejection>,
) -> ApiResult<Json<DiscountResponse>> {
    let Json(request) = payload?;
    validate_amount("listing_price", Some(request.listing_price))?;
    validate_amount("selling_price", Some(request.selling_price))?;

    let discount_percent = calc_discount_percent(request.listing_price, request.selling_price);
    debug!(
        listing_price = request.listing_price,
        selling_price = request.selling_price,
        discount_percent,
        "Computed discount"
    );

    Ok(Json(DiscountResponse { discount_percent }))
}

/// Validates and prices a named variant, as the back office saves it.
pub async fn variant_pricing(
    State(state): State<AppState>,
    payload: Result<Json<VariantPricingRequest>, JsonRejection>,
) -> ApiResult<Json<VariantPricingResponse>> {
    let Json(request) = payload?;
    let quote = request.quote.or_gst_rate(state.config.default_gst_rate);

    let variant = VariantPricing::price(&request.sku, &quote)?;
    debug!(
        sku = %variant.sku,
        selling_price = variant.pricing.selling_price,
        "Priced variant"
    );

    Ok(Json(VariantPricingResponse {
        display: variant.display(),
        variant,
    }))
}

/// Totals for a cart of already-priced variants.
pub async fn cart_totals(
    payload: Result<Json<CartRequest>, JsonRejection>,
) -> ApiResult<Json<CartTotals>> {
    let Json(request) = payload?;

    for line in &request.lines {
        validate_sku(&line.sku)?;
        validate_variant_id(&line.variant_id)?;
    }

    let totals = compute_totals(&request.lines)?;
    debug!(
        lines = totals.line_count,
        items = totals.item_count,
        subtotal = %totals.subtotal,
        "Computed cart totals"
    );

    Ok(Json(totals))
}

// =============================================================================
// Route Tests
// =============================================================================
