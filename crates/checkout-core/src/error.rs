//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                       │
//! │  ├── PricingError     - Provider resolution failures                    │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  checkout-cli errors (separate crate)                                   │
//! │  └── ConfigError      - Bad environment / flag values                   │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → anyhow (CLI) → stderr           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Does NOT Fail
//! Provider reads, the single-strategy resolver and the order calculator are
//! total functions. An unknown country token on the single-strategy path
//! falls back to the default rate; only the family resolver rejects unknown
//! regions.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Provider resolution errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// No family factory is registered for the region token.
    ///
    /// ## When This Occurs
    /// ```text
    /// resolve_family("DE")
    ///      │
    ///      ▼
    /// Region::from_str("DE") → no match
    ///      │
    ///      ▼
    /// UnknownRegion { token: "DE" }
    /// ```
    #[error("Unknown region: {token}")]
    UnknownRegion { token: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before resolution runs, for input coming from outside the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., a promo code that is not a UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_region_message() {
        let err = PricingError::UnknownRegion {
            token: "DE".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown region: DE");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "promo code".to_string(),
        };
        assert_eq!(err.to_string(), "promo code is required");

        let err = ValidationError::OutOfRange {
            field: "order amount".to_string(),
            min: 0,
            max: 1_000,
        };
        assert_eq!(err.to_string(), "order amount must be between 0 and 1000");

        let err = ValidationError::MustBeNonNegative {
            field: "order amount".to_string(),
        };
        assert_eq!(err.to_string(), "order amount must not be negative");
    }

    #[test]
    fn test_validation_converts_to_pricing_error() {
        let validation_err = ValidationError::Required {
            field: "promo code".to_string(),
        };
        let pricing_err: PricingError = validation_err.into();
        assert!(matches!(pricing_err, PricingError::Validation(_)));
    }
}
