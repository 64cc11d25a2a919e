//! # timberline-core: Pure Pricing Logic for Timberline
//!
//! Every price the storefront shows and every price the back office stores on
//! a product variant is derived here. The crate is pure: no I/O, no logging,
//! no clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Timberline Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Storefront + Back Office (React)                   │   │
//! │  │   Variant form ──► Product page ──► Cart ──► Checkout           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/pricing-api                             │   │
//! │  │    /pricing/*, /variants/pricing, /cart/totals                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ timberline-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  round2   │  │   Money   │  │ CartLine  │  │   rules   │  │   │
//! │  │   │  GST math │  │  (paise)  │  │ CartTotals│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - GST-inclusive selling price, listing price and discount math
//! - [`types`] - Quote requests, variant pricing records, storefront display
//! - [`money`] - Integer paise type used for aggregation
//! - [`cart`] - Cart total aggregation over already-priced variants
//! - [`validation`] - Form-layer checks run before the engine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use timberline_core::pricing::compute_variant_from_base;
//!
//! // ₹1000 base at 18% GST, shown against a ₹1500 listing price
//! let priced = compute_variant_from_base(Some(1000.0), Some(18.0), Some(1500.0));
//!
//! assert_eq!(priced.selling_price, 1180.0);
//! assert_eq!(priced.savings, 320.0);
//! assert_eq!(priced.discount_percent, 21);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use timberline_core::PricingResult` instead of
// `use timberline_core::pricing::PricingResult`

pub use cart::{CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::PricingResult;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single variant in a cart line.
///
/// Furniture orders above this are handled as bulk quotes by the sales team.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest GST rate (percent) accepted by validation.
pub const MAX_GST_RATE: f64 = 100.0;

/// The GST slabs furniture is normally listed under.
///
/// Informational only: validation accepts any rate in `0..=MAX_GST_RATE`.
pub const STANDARD_GST_SLABS: [f64; 5] = [0.0, 5.0, 12.0, 18.0, 28.0];
