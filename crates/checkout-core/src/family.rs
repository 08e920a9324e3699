//! # Family Resolver
//!
//! Resolves a region to a matched pair of providers: one discount provider
//! and one shipping-cost provider, both from the same region.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "BE" ──► Region::Belgium ──► factory_for() ──► BelgiumFamily           │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                                      ProviderFamily::from_factory()     │
//! │                                       ├── BelgiumDiscount  (20%)        │
//! │                                       └── BelgiumShipping  (20.00)      │
//! │                                                                         │
//! │  "DE" ──► PricingError::UnknownRegion                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pairing Guarantee
//! `ProviderFamily` has private fields and a single crate-private
//! constructor that takes ONE factory and asks it for both providers.
//! `FamilyFactory` is sealed, so outside code cannot supply a factory that
//! mixes regions. There is no way to build a family holding a Belgian
//! discount next to French shipping.
//!
//! ## Adding a Region
//! Add a `Region` variant, a unit struct implementing [`FamilyFactory`]
//! (plus its `sealed::Sealed` impl), and a match arm in [`factory_for`].
//! Callers do not change.

use tracing::debug;

use crate::error::PricingResult;
use crate::money::Money;
use crate::provider::{
    BelgiumDiscount, BelgiumShipping, DiscountProvider, FranceDiscount, FranceShipping,
    ShippingCostProvider,
};
use crate::types::{DiscountPercentage, Region};

// =============================================================================
// Factory Capability
// =============================================================================

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::BelgiumFamily {}
    impl Sealed for super::FranceFamily {}
}

/// Produces the providers for one region.
///
/// Sealed: only the factories in this module implement it, and each returns
/// providers of its own region from both methods. A family is built by
/// calling both on the same factory.
pub trait FamilyFactory: sealed::Sealed + Send + Sync {
    /// The region this factory serves.
    fn region(&self) -> Region;

    /// Builds the region's discount provider.
    fn create_discount_provider(&self) -> Box<dyn DiscountProvider>;

    /// Builds the region's shipping-cost provider.
    fn create_shipping_cost_provider(&self) -> Box<dyn ShippingCostProvider>;
}

/// Providers for the Belgian market.
#[derive(Debug, Clone, Copy, Default)]
pub struct BelgiumFamily;

impl FamilyFactory for BelgiumFamily {
    fn region(&self) -> Region {
        Region::Belgium
    }

    fn create_discount_provider(&self) -> Box<dyn DiscountProvider> {
        Box::new(BelgiumDiscount)
    }

    fn create_shipping_cost_provider(&self) -> Box<dyn ShippingCostProvider> {
        Box::new(BelgiumShipping)
    }
}

/// Providers for the French market.
#[derive(Debug, Clone, Copy, Default)]
pub struct FranceFamily;

impl FamilyFactory for FranceFamily {
    fn region(&self) -> Region {
        Region::France
    }

    fn create_discount_provider(&self) -> Box<dyn DiscountProvider> {
        Box::new(FranceDiscount)
    }

    fn create_shipping_cost_provider(&self) -> Box<dyn ShippingCostProvider> {
        Box::new(FranceShipping)
    }
}

// =============================================================================
// Registry
// =============================================================================

static BELGIUM_FAMILY: BelgiumFamily = BelgiumFamily;
static FRANCE_FAMILY: FranceFamily = FranceFamily;

/// Returns the registered factory for a region.
///
/// Total over `Region`: every variant has exactly one factory.
pub fn factory_for(region: Region) -> &'static dyn FamilyFactory {
    match region {
        Region::Belgium => &BELGIUM_FAMILY,
        Region::France => &FRANCE_FAMILY,
    }
}

// =============================================================================
// Provider Family
// =============================================================================

/// A discount provider and a shipping-cost provider from the same region.
#[derive(Debug)]
pub struct ProviderFamily {
    region: Region,
    discount: Box<dyn DiscountProvider>,
    shipping: Box<dyn ShippingCostProvider>,
}

impl ProviderFamily {
    /// Builds both providers from one factory.
    pub(crate) fn from_factory(factory: &dyn FamilyFactory) -> Self {
        ProviderFamily {
            region: factory.region(),
            discount: factory.create_discount_provider(),
            shipping: factory.create_shipping_cost_provider(),
        }
    }

    /// The region both providers belong to.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn discount(&self) -> &dyn DiscountProvider {
        self.discount.as_ref()
    }

    #[inline]
    pub fn shipping(&self) -> &dyn ShippingCostProvider {
        self.shipping.as_ref()
    }

    /// Shorthand for `self.discount().discount_percentage()`.
    pub fn discount_percentage(&self) -> DiscountPercentage {
        self.discount.discount_percentage()
    }

    /// Shorthand for `self.shipping().shipping_cost()`.
    pub fn shipping_cost(&self) -> Money {
        self.shipping.shipping_cost()
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Creates the provider family for a known region. Cannot fail.
pub fn create_family(region: Region) -> ProviderFamily {
    let family = ProviderFamily::from_factory(factory_for(region));
    debug!(
        region = %region,
        discount = %family.discount_percentage(),
        shipping = %family.shipping_cost(),
        "Created provider family"
    );
    family
}

/// Resolves a region token to its provider family.
///
/// Tokens match exactly (`"BE"`, `"FR"`).
///
/// ## Errors
/// `PricingError::UnknownRegion` for every token with no registered family,
/// including empty, lowercase and padded tokens.
///
/// ## Example
/// ```rust
/// use checkout_core::family::resolve_family;
///
/// let family = resolve_family("FR").unwrap();
/// assert_eq!(family.discount_percentage().value(), 10);
/// assert_eq!(family.shipping_cost().to_string(), "25.00");
///
/// assert!(resolve_family("DE").is_err());
/// ```
pub fn resolve_family(region_token: &str) -> PricingResult<ProviderFamily> {
    let region = region_token.parse::<Region>().map_err(|e| {
        debug!(token = %region_token, error = %e, "Region token rejected");
        e
    })?;
    Ok(create_family(region))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    #[test]
    fn test_belgium_family() {
        let family = resolve_family("BE").unwrap();
        assert_eq!(family.region(), Region::Belgium);
        assert_eq!(family.discount_percentage().value(), 20);
        assert_eq!(family.shipping_cost(), Money::from_major(20));
    }

    #[test]
    fn test_france_family() {
        let family = resolve_family("FR").unwrap();
        assert_eq!(family.region(), Region::France);
        assert_eq!(family.discount_percentage().value(), 10);
        assert_eq!(family.shipping_cost(), Money::from_major(25));
    }

    #[test]
    fn test_unknown_region_is_an_error() {
        let err = resolve_family("DE").unwrap_err();
        assert_eq!(
            err,
            PricingError::UnknownRegion {
                token: "DE".to_string()
            }
        );
    }

    #[test]
    fn test_every_unmatched_token_is_unknown_region() {
        for token in ["", "B3", "BELGIUMXX", "be", "fr", " BE"] {
            assert_eq!(
                resolve_family(token).unwrap_err(),
                PricingError::UnknownRegion {
                    token: token.to_string()
                }
            );
        }
    }

    #[test]
    fn test_family_never_mixes_regions() {
        let table = [
            (Region::Belgium, 20, Money::from_major(20)),
            (Region::France, 10, Money::from_major(25)),
        ];

        for (region, percent, shipping) in table {
            let family = create_family(region);
            assert_eq!(family.region(), region);
            assert_eq!(family.discount_percentage().value(), percent);
            assert_eq!(family.shipping_cost(), shipping);
        }
    }

    #[test]
    fn test_every_region_has_a_factory() {
        for region in Region::ALL {
            assert_eq!(factory_for(region).region(), region);
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve_family("BE").unwrap();
        let second = resolve_family("BE").unwrap();
        assert_eq!(first.discount_percentage(), second.discount_percentage());
        assert_eq!(first.shipping_cost(), second.shipping_cost());
    }

    #[test]
    fn test_family_is_built_from_a_single_factory() {
        for region in Region::ALL {
            let factory = factory_for(region);
            let family = ProviderFamily::from_factory(factory);
            assert_eq!(family.region(), factory.region());
            assert_eq!(
                family.discount_percentage(),
                factory.create_discount_provider().discount_percentage()
            );
            assert_eq!(
                family.shipping_cost(),
                factory.create_shipping_cost_provider().shipping_cost()
            );
        }
    }
}
