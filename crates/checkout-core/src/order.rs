//! # Order Calculator
//!
//! Applies resolved providers to a base order amount.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  total = base - (base / 100) * discount% + shipping                     │
//! │                  └────┬────┘                                            │
//! │                 integer division, truncated BEFORE multiplying          │
//! │                                                                         │
//! │  base 250, discount 20%:                                                │
//! │    (250 / 100) * 20 = 2 * 20 = 40     ← what we do                      │
//! │     250 * 20 / 100         = 50       ← NOT equivalent                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount is taken per FULL hundred of the base amount; the remainder
//! below 100 is never discounted.
//!
//! ## Usage
//! ```rust
//! use checkout_core::family::resolve_family;
//! use checkout_core::order::Checkout;
//!
//! let checkout = Checkout::new(resolve_family("BE").unwrap(), 200).unwrap();
//! let quote = checkout.quote();
//! assert_eq!(quote.total.to_string(), "180.00");
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::PricingResult;
use crate::family::{resolve_family, ProviderFamily};
use crate::money::Money;
use crate::provider::{DiscountProvider, ShippingCostProvider};
use crate::types::{DiscountPercentage, Region};
use crate::validation::validate_order_amount;

// =============================================================================
// Pure Calculation
// =============================================================================

/// The amount taken off a base order amount (whole units).
///
/// ## Example
/// ```rust
/// use checkout_core::order::discount_amount;
/// use checkout_core::types::DiscountPercentage;
///
/// let pct = DiscountPercentage::new(20).unwrap();
/// assert_eq!(discount_amount(250, pct).to_string(), "40.00");
/// assert_eq!(discount_amount(99, pct).to_string(), "0.00");
/// ```
pub fn discount_amount(base_amount: i64, percentage: DiscountPercentage) -> Money {
    let full_hundreds = base_amount / 100;
    Money::from_major(full_hundreds.saturating_mul(percentage.value() as i64))
}

/// Computes the order total from a base amount and the two providers.
///
/// Pure and infallible. The providers do not have to come from the same
/// family; use [`Checkout`] when they must.
///
/// ## Domain
/// Exact for base amounts in `0..=MAX_ORDER_AMOUNT` (the range
/// `validate_order_amount` accepts). Outside it the result saturates at the
/// i64 cent bounds rather than panicking, and is not meaningful.
///
/// ## Example
/// ```rust
/// use checkout_core::order::calculate_total;
/// use checkout_core::provider::{FranceDiscount, FranceShipping};
///
/// let total = calculate_total(200, &FranceDiscount, &FranceShipping);
/// assert_eq!(total.to_string(), "205.00");
/// ```
pub fn calculate_total(
    base_amount: i64,
    discount: &dyn DiscountProvider,
    shipping: &dyn ShippingCostProvider,
) -> Money {
    Money::from_major(base_amount) - discount_amount(base_amount, discount.discount_percentage())
        + shipping.shipping_cost()
}

// =============================================================================
// Order Quote
// =============================================================================

/// Breakdown of one checkout calculation, handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderQuote {
    /// Region whose family priced the order.
    pub region: Region,

    /// Base order amount.
    pub base_amount: Money,

    /// Discount percentage applied.
    pub discount_percentage: DiscountPercentage,

    /// Amount taken off the base.
    pub discount_amount: Money,

    /// Shipping cost added.
    pub shipping_cost: Money,

    /// Final amount: base - discount + shipping.
    pub total: Money,
}

// =============================================================================
// Checkout
// =============================================================================

/// One checkout attempt: a base amount priced by one provider family.
///
/// Built per attempt and consumed by [`Checkout::quote`].
#[derive(Debug)]
pub struct Checkout {
    base_amount: i64,
    family: ProviderFamily,
}

impl Checkout {
    /// Creates a checkout for a base amount in whole currency units.
    ///
    /// ## Errors
    /// `PricingError::Validation` if the amount is negative or above
    /// `MAX_ORDER_AMOUNT`.
    pub fn new(family: ProviderFamily, base_amount: i64) -> PricingResult<Self> {
        validate_order_amount(base_amount)?;
        Ok(Checkout {
            base_amount,
            family,
        })
    }

    /// Resolves the family for a region token and creates the checkout.
    ///
    /// ## Errors
    /// - `PricingError::UnknownRegion` for unregistered regions
    /// - `PricingError::Validation` for amounts outside `0..=MAX_ORDER_AMOUNT`
    pub fn for_region(region_token: &str, base_amount: i64) -> PricingResult<Self> {
        Checkout::new(resolve_family(region_token)?, base_amount)
    }

    /// Computes the total without consuming the checkout.
    pub fn total(&self) -> Money {
        calculate_total(self.base_amount, self.family.discount(), self.family.shipping())
    }

    /// Consumes the checkout and returns the full breakdown.
    pub fn quote(self) -> OrderQuote {
        let percentage = self.family.discount_percentage();
        let quote = OrderQuote {
            region: self.family.region(),
            base_amount: Money::from_major(self.base_amount),
            discount_percentage: percentage,
            discount_amount: discount_amount(self.base_amount, percentage),
            shipping_cost: self.family.shipping_cost(),
            total: self.total(),
        };

        debug!(
            region = %quote.region,
            base = %quote.base_amount,
            total = %quote.total,
            "Quoted checkout"
        );
        quote
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{resolve_discount_by_code, resolve_discount_by_country};
    use crate::error::{PricingError, ValidationError};
    use crate::provider::{BelgiumDiscount, BelgiumShipping, FranceDiscount, FranceShipping};
    use crate::types::PromoCode;
    use crate::{DEFAULT_ORDER_AMOUNT, MAX_ORDER_AMOUNT};

    #[test]
    fn test_belgium_total() {
        let total = calculate_total(200, &BelgiumDiscount, &BelgiumShipping);
        assert_eq!(total, Money::from_major(180));
    }

    #[test]
    fn test_france_total() {
        let total = calculate_total(200, &FranceDiscount, &FranceShipping);
        assert_eq!(total, Money::from_major(205));
    }

    #[test]
    fn test_division_happens_before_multiplication() {
        // 250 / 100 = 2, so 40 off (not 50)
        let total = calculate_total(250, &BelgiumDiscount, &BelgiumShipping);
        assert_eq!(total, Money::from_major(250 - 40 + 20));

        // Below one hundred nothing is discounted
        let total = calculate_total(99, &BelgiumDiscount, &BelgiumShipping);
        assert_eq!(total, Money::from_major(99 + 20));
    }

    #[test]
    fn test_zero_base_pays_only_shipping() {
        assert_eq!(
            calculate_total(0, &FranceDiscount, &FranceShipping),
            Money::from_major(25)
        );
    }

    #[test]
    fn test_single_strategy_discounts_plug_into_calculator() {
        let by_code = resolve_discount_by_code(PromoCode::generate());
        assert_eq!(
            calculate_total(300, &by_code, &FranceShipping),
            Money::from_major(300 - 45 + 25)
        );

        let by_country = resolve_discount_by_country("XX");
        assert_eq!(
            calculate_total(200, &by_country, &BelgiumShipping),
            Money::from_major(200 - 20 + 20)
        );
    }

    #[test]
    fn test_checkout_quote_breakdown() {
        let quote = Checkout::for_region("BE", 200).unwrap().quote();
        assert_eq!(quote.region, Region::Belgium);
        assert_eq!(quote.base_amount, Money::from_major(200));
        assert_eq!(quote.discount_percentage.value(), 20);
        assert_eq!(quote.discount_amount, Money::from_major(40));
        assert_eq!(quote.shipping_cost, Money::from_major(20));
        assert_eq!(quote.total, Money::from_major(180));
    }

    #[test]
    fn test_checkout_default_amount() {
        let checkout = Checkout::new(resolve_family("FR").unwrap(), DEFAULT_ORDER_AMOUNT).unwrap();
        assert_eq!(checkout.total(), Money::from_major(205));
        assert_eq!(checkout.quote().base_amount, Money::from_major(200));
    }

    #[test]
    fn test_max_amount_total() {
        // 10^15 - (10^13 * 20) + 20
        let total = calculate_total(MAX_ORDER_AMOUNT, &BelgiumDiscount, &BelgiumShipping);
        assert_eq!(total, Money::from_major(800_000_000_000_020));

        let quote = Checkout::for_region("FR", MAX_ORDER_AMOUNT).unwrap().quote();
        assert_eq!(quote.total, Money::from_major(900_000_000_000_025));
    }

    #[test]
    fn test_large_amount_rejected() {
        let err = Checkout::for_region("BE", MAX_ORDER_AMOUNT + 1).unwrap_err();
        assert!(matches!(
            err,
            PricingError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert!(Checkout::for_region("BE", 100_000_000_000_000_000).is_err());
    }

    #[test]
    fn test_out_of_domain_amounts_do_not_panic() {
        let total = calculate_total(100_000_000_000_000_000, &BelgiumDiscount, &BelgiumShipping);
        assert!(total.cents() >= 0);

        let total = calculate_total(i64::MAX, &FranceDiscount, &FranceShipping);
        assert!(total.cents() >= 0);

        let _ = calculate_total(i64::MIN, &FranceDiscount, &FranceShipping);
    }

    #[test]
    fn test_checkout_rejects_negative_amount() {
        let err = Checkout::for_region("FR", -1).unwrap_err();
        assert!(matches!(err, PricingError::Validation(_)));
    }

    #[test]
    fn test_checkout_rejects_unknown_region() {
        let err = Checkout::for_region("NL", 200).unwrap_err();
        assert!(matches!(err, PricingError::UnknownRegion { .. }));
    }

    #[test]
    fn test_quote_serializes_amounts_as_cents() {
        let quote = Checkout::for_region("FR", 200).unwrap().quote();
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["region"], "FR");
        assert_eq!(json["discount_percentage"], 10);
        assert_eq!(json["shipping_cost"], 2500);
        assert_eq!(json["total"], 20_500);
    }
}
