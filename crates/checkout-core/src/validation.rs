//! # Validation Module
//!
//! Input validation for values that enter the core from outside
//! (environment, command line, request payloads).
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CLI flag / env var                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: shape checks (empty, format, range)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Resolvers: is the region registered? (UnknownRegion otherwise)         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Region tokens are not shape-checked: on the family path any token that
//! matches no factory is `UnknownRegion`, and on the single-strategy path
//! it gets the default rate.

use uuid::Uuid;

use crate::error::ValidationError;
use crate::types::PromoCode;
use crate::MAX_ORDER_AMOUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a base order amount in whole currency units.
///
/// ## Rules
/// - Must be non-negative; zero is an empty order
/// - Must not exceed `MAX_ORDER_AMOUNT`, so the amount in cents, minus
///   any discount, plus shipping stays inside i64
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_order_amount;
/// use checkout_core::MAX_ORDER_AMOUNT;
///
/// assert!(validate_order_amount(200).is_ok());
/// assert!(validate_order_amount(MAX_ORDER_AMOUNT).is_ok());
/// assert!(validate_order_amount(MAX_ORDER_AMOUNT + 1).is_err());
/// ```
pub fn validate_order_amount(amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "order amount".to_string(),
        });
    }

    if amount > MAX_ORDER_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: "order amount".to_string(),
            min: 0,
            max: MAX_ORDER_AMOUNT,
        });
    }

    Ok(())
}

/// Parses a promo code from its UUID text form.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::parse_promo_code;
///
/// assert!(parse_promo_code("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(parse_promo_code("  ").is_err());
/// ```
pub fn parse_promo_code(code: &str) -> ValidationResult<PromoCode> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promo code".to_string(),
        });
    }

    let id = Uuid::parse_str(code).map_err(|_| ValidationError::InvalidFormat {
        field: "promo code".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(PromoCode::new(id))
}

// =============================================================================
// Unit Tests
// =============================================================================
