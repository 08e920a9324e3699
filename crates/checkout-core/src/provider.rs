//! # Pricing Providers
//!
//! The two capabilities a checkout needs, and the region-bound
//! implementations behind them.
//!
//! ## Rate Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Provider               Trigger          Discount      Shipping         │
//! │  ─────────────────────  ───────────────  ────────────  ──────────────   │
//! │  BelgiumDiscount        region "BE"      20%           -                │
//! │  BelgiumShipping        region "BE"      -             20.00            │
//! │  FranceDiscount         region "FR"      10%           -                │
//! │  FranceShipping         region "FR"      -             25.00            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers only ever see `dyn DiscountProvider` / `dyn ShippingCostProvider`,
//! never which concrete provider is behind them.

use std::fmt;

use crate::money::Money;
use crate::types::DiscountPercentage;

// =============================================================================
// Capabilities
// =============================================================================

/// Exposes a discount percentage.
///
/// Implementations are immutable after construction and never fail.
pub trait DiscountProvider: fmt::Debug + Send + Sync {
    /// The percentage to take off per full hundred of the order amount.
    fn discount_percentage(&self) -> DiscountPercentage;
}

/// Exposes a shipping cost.
///
/// Implementations are immutable after construction and never fail.
pub trait ShippingCostProvider: fmt::Debug + Send + Sync {
    /// The non-negative shipping cost added to the order.
    fn shipping_cost(&self) -> Money;
}

impl<T: DiscountProvider + ?Sized> DiscountProvider for Box<T> {
    fn discount_percentage(&self) -> DiscountPercentage {
        (**self).discount_percentage()
    }
}

impl<T: ShippingCostProvider + ?Sized> ShippingCostProvider for Box<T> {
    fn shipping_cost(&self) -> Money {
        (**self).shipping_cost()
    }
}

// =============================================================================
// Region Rates
// =============================================================================

pub(crate) const BELGIUM_DISCOUNT: DiscountPercentage = DiscountPercentage::from_table(20);
pub(crate) const FRANCE_DISCOUNT: DiscountPercentage = DiscountPercentage::from_table(10);
pub(crate) const BELGIUM_SHIPPING: Money = Money::from_major(20);
pub(crate) const FRANCE_SHIPPING: Money = Money::from_major(25);

// =============================================================================
// Belgium
// =============================================================================

/// Discount for the Belgian market.
#[derive(Debug, Clone, Copy, Default)]
pub struct BelgiumDiscount;

impl DiscountProvider for BelgiumDiscount {
    fn discount_percentage(&self) -> DiscountPercentage {
        BELGIUM_DISCOUNT
    }
}

/// Shipping cost for the Belgian market.
#[derive(Debug, Clone, Copy, Default)]
pub struct BelgiumShipping;

impl ShippingCostProvider for BelgiumShipping {
    fn shipping_cost(&self) -> Money {
        BELGIUM_SHIPPING
    }
}

// =============================================================================
// France
// =============================================================================

/// Discount for the French market.
#[derive(Debug, Clone, Copy, Default)]
pub struct FranceDiscount;

impl DiscountProvider for FranceDiscount {
    fn discount_percentage(&self) -> DiscountPercentage {
        FRANCE_DISCOUNT
    }
}

/// Shipping cost for the French market.
#[derive(Debug, Clone, Copy, Default)]
pub struct FranceShipping;

impl ShippingCostProvider for FranceShipping {
    fn shipping_cost(&self) -> Money {
        FRANCE_SHIPPING
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
