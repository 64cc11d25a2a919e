//! # Error Types
//!
//! Domain-specific error types for timberline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  timberline-core errors (this file)                                    │
//! │  ├── CoreError        - Business rule failures (cart limits)           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pricing-api errors (app crate)                                        │
//! │  └── ApiError         - What the storefront sees (JSON)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Storefront             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing engine itself never returns an error. These types belong to
//! the validation and cart layers that sit in front of it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart has exceeded the maximum number of lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    ///
    /// ## When This Occurs
    /// ```text
    /// Cart line: "Sheesham Dining Table" x 1200
    ///      │
    ///      ▼
    /// QuantityTooLarge { sku: "DT-SHEESHAM-6", requested: 1200, max: 999 }
    ///      │
    ///      ▼
    /// Storefront shows: "Contact us for bulk orders"
    /// ```
    #[error("Quantity {requested} for {sku} exceeds maximum allowed ({max})")]
    QuantityTooLarge {
        sku: String,
        requested: i64,
        max: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the form layer before the pricing engine runs. The engine would
/// accept these inputs and produce degenerate results; validation rejects
/// them so a user never saves one.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be above zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::Negative { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
