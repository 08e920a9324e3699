//! # checkout-core: Pricing Provider Resolution
//!
//! Resolves the pricing providers for a checkout context and computes the
//! order total from them. Pure functions only, no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout-cli (presentation)                     │   │
//! │  │      env / flags ──► resolve ──► quote ──► text or JSON         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐    │   │
//! │  │   │ provider │──►│  family  │──►│  order   │   │ discount │    │   │
//! │  │   │ traits + │   │ region → │   │ total +  │   │ country/ │    │   │
//! │  │   │ BE / FR  │   │ matched  │   │ quote    │   │ code →   │    │   │
//! │  │   │          │   │ pair     │   │          │   │ single   │    │   │
//! │  │   └──────────┘   └──────────┘   └──────────┘   └──────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`provider`] - `DiscountProvider` / `ShippingCostProvider` and the region providers
//! - [`family`] - Region → matched (discount, shipping) pair
//! - [`discount`] - Country token or promo code → single discount provider
//! - [`order`] - Total calculation and checkout quotes
//! - [`types`] - `Region`, `PromoCode`, `DiscountPercentage`
//! - [`money`] - Integer-cents `Money`
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{calculate_total, resolve_discount_by_code, resolve_family};
//! use checkout_core::types::PromoCode;
//!
//! let family = resolve_family("BE").unwrap();
//! let total = calculate_total(200, family.discount(), family.shipping());
//! assert_eq!(total.to_string(), "180.00");
//!
//! // Promo codes always give 15%, whatever the code
//! let promo = resolve_discount_by_code(PromoCode::generate());
//! let total = calculate_total(200, &promo, family.shipping());
//! assert_eq!(total.to_string(), "190.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod family;
pub mod money;
pub mod order;
pub mod provider;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{resolve_discount_by_code, resolve_discount_by_country, DiscountRule};
pub use error::{PricingError, PricingResult, ValidationError};
pub use family::{create_family, resolve_family, ProviderFamily};
pub use money::Money;
pub use order::{calculate_total, Checkout, OrderQuote};
pub use provider::{DiscountProvider, ShippingCostProvider};
pub use types::{DiscountPercentage, PromoCode, Region};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Base order amount used when none is given (whole currency units).
pub const DEFAULT_ORDER_AMOUNT: i64 = 200;

/// Largest accepted base order amount (whole currency units).
///
/// Keeps the amount in cents, minus any discount, plus shipping well inside
/// i64, so totals for accepted amounts are exact.
pub const MAX_ORDER_AMOUNT: i64 = 1_000_000_000_000_000;
