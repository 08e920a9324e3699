//! # Single-Strategy Discount Resolver
//!
//! Resolves a single discount provider from either a country token or a
//! promo code. There is no shipping on this path.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source              Input            Percentage                        │
//! │  ──────────────────  ───────────────  ──────────────────────────────    │
//! │  Country             "BE"             20%                               │
//! │  Country             anything else    10%  (default, never an error)    │
//! │  Promo code          any code         15%                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Evaluated on Read
//! A country rule stores the token it was built with and looks the rate up
//! each time `discount_percentage()` is called. Nothing is resolved when
//! the rule is constructed.

use tracing::debug;

use crate::provider::{DiscountProvider, BELGIUM_DISCOUNT};
use crate::types::{DiscountPercentage, PromoCode};

/// Rate for any country token other than "BE".
pub const DEFAULT_COUNTRY_DISCOUNT: DiscountPercentage = DiscountPercentage::from_table(10);

/// Rate for every promo code.
pub const PROMO_CODE_DISCOUNT: DiscountPercentage = DiscountPercentage::from_table(15);

/// Looks up the country rate for a token.
///
/// Matching is exact: only `"BE"` gets the Belgian rate. Unknown, empty
/// and lowercase tokens all get [`DEFAULT_COUNTRY_DISCOUNT`].
pub fn country_discount_percentage(country_token: &str) -> DiscountPercentage {
    match country_token {
        "BE" => BELGIUM_DISCOUNT,
        _ => DEFAULT_COUNTRY_DISCOUNT,
    }
}

// =============================================================================
// Discount Rule
// =============================================================================

/// A discount provider bound to a country token or a promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountRule {
    /// Rate depends on the captured country token.
    Country { token: String },
    /// Fixed promo-code rate; the code itself is carried but not inspected.
    PromoCode(PromoCode),
}

impl DiscountRule {
    /// Captures a country token without resolving it.
    pub fn by_country(country_token: impl Into<String>) -> Self {
        DiscountRule::Country {
            token: country_token.into(),
        }
    }

    /// Binds a promo code.
    pub fn by_code(code: PromoCode) -> Self {
        DiscountRule::PromoCode(code)
    }
}

impl DiscountProvider for DiscountRule {
    fn discount_percentage(&self) -> DiscountPercentage {
        match self {
            DiscountRule::Country { token } => country_discount_percentage(token),
            DiscountRule::PromoCode(_) => PROMO_CODE_DISCOUNT,
        }
    }
}

// =============================================================================
// Factories
// =============================================================================

/// Produces a discount rule on demand.
pub trait DiscountFactory {
    fn create_discount_provider(&self) -> DiscountRule;
}

/// Builds country-bound rules for one token.
#[derive(Debug, Clone)]
pub struct CountryDiscountFactory {
    country_token: String,
}

impl CountryDiscountFactory {
    pub fn new(country_token: impl Into<String>) -> Self {
        CountryDiscountFactory {
            country_token: country_token.into(),
        }
    }
}

impl DiscountFactory for CountryDiscountFactory {
    fn create_discount_provider(&self) -> DiscountRule {
        DiscountRule::by_country(self.country_token.clone())
    }
}

/// Builds code-bound rules for one promo code.
#[derive(Debug, Clone, Copy)]
pub struct CodeDiscountFactory {
    code: PromoCode,
}

impl CodeDiscountFactory {
    pub fn new(code: PromoCode) -> Self {
        CodeDiscountFactory { code }
    }
}

impl DiscountFactory for CodeDiscountFactory {
    fn create_discount_provider(&self) -> DiscountRule {
        DiscountRule::by_code(self.code)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Resolves the discount for a country token. Never fails.
///
/// ## Example
/// ```rust
/// use checkout_core::discount::resolve_discount_by_country;
/// use checkout_core::provider::DiscountProvider;
///
/// assert_eq!(resolve_discount_by_country("BE").discount_percentage().value(), 20);
/// assert_eq!(resolve_discount_by_country("XX").discount_percentage().value(), 10);
/// ```
pub fn resolve_discount_by_country(country_token: &str) -> DiscountRule {
    debug!(token = %country_token, "Resolving discount by country");
    CountryDiscountFactory::new(country_token).create_discount_provider()
}

/// Resolves the discount for a promo code. Never fails.
pub fn resolve_discount_by_code(code: PromoCode) -> DiscountRule {
    debug!(code = %code, "Resolving discount by promo code");
    CodeDiscountFactory::new(code).create_discount_provider()
}

// =============================================================================
// Unit Tests
// =============================================================================
