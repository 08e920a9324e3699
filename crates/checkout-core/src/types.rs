//! # Domain Types
//!
//! Identifier and value types shared by the resolvers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Region      │   │    PromoCode    │   │ DiscountPercentage  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  Belgium "BE"   │   │  UUID token     │   │  u32, 0..=100       │   │
//! │  │  France  "FR"   │   │  (opaque)       │   │  20 = 20%           │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  Region selects a provider FAMILY; PromoCode selects a single           │
//! │  discount provider.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{PricingError, ValidationError};
use crate::validation::ValidationResult;

// =============================================================================
// Discount Percentage
// =============================================================================

/// A whole-number discount percentage between 0 and 100.
///
/// ## Why Whole Percent?
/// The order formula removes `percentage` units per full hundred of the
/// base amount, so fractional rates have no meaning here (unlike the basis
/// points used for tax elsewhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DiscountPercentage(u32);

impl DiscountPercentage {
    /// Largest allowed percentage.
    pub const MAX: u32 = 100;

    /// Creates a percentage, rejecting values above 100.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::types::DiscountPercentage;
    ///
    /// assert_eq!(DiscountPercentage::new(15).unwrap().value(), 15);
    /// assert!(DiscountPercentage::new(101).is_err());
    /// ```
    pub fn new(percent: u32) -> ValidationResult<Self> {
        if percent > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: "discount percentage".to_string(),
                min: 0,
                max: Self::MAX as i64,
            });
        }
        Ok(DiscountPercentage(percent))
    }

    /// Builds a percentage from a rate table constant.
    ///
    /// Only used for the fixed tables in this crate, all of which are <= 100.
    #[inline]
    pub(crate) const fn from_table(percent: u32) -> Self {
        DiscountPercentage(percent)
    }

    /// Returns the percentage as an integer.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DiscountPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Region
// =============================================================================

/// A geographic market with its own provider family.
///
/// The set is closed: adding a market means adding a variant here and a
/// family factory in [`crate::family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Belgium.
    #[serde(rename = "BE")]
    Belgium,
    /// France.
    #[serde(rename = "FR")]
    France,
}

impl Region {
    /// Every region with a registered family.
    pub const ALL: [Region; 2] = [Region::Belgium, Region::France];

    /// Returns the two-letter region token.
    pub const fn code(&self) -> &'static str {
        match self {
            Region::Belgium => "BE",
            Region::France => "FR",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a region token.
///
/// Matching is exact, the same as the single-strategy country lookup:
/// `"be"`, `" BE"` and `""` are all `UnknownRegion`.
///
/// ## Example
/// ```rust
/// use checkout_core::types::Region;
///
/// assert_eq!("FR".parse::<Region>().unwrap(), Region::France);
/// assert!("fr".parse::<Region>().is_err());
/// assert!("DE".parse::<Region>().is_err());
/// ```
impl FromStr for Region {
    type Err = PricingError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "BE" => Ok(Region::Belgium),
            "FR" => Ok(Region::France),
            _ => Err(PricingError::UnknownRegion {
                token: token.to_string(),
            }),
        }
    }
}

// =============================================================================
// Promo Code
// =============================================================================

/// An opaque promotional code token.
///
/// Codes are 128-bit identifiers. The token is carried through resolution
/// but does not change the discount it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromoCode(Uuid);

impl PromoCode {
    /// Wraps an existing UUID.
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        PromoCode(id)
    }

    /// Issues a fresh random code (UUID v4).
    pub fn generate() -> Self {
        PromoCode(Uuid::new_v4())
    }

    /// Parses a code from its hyphenated UUID form.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::types::PromoCode;
    ///
    /// assert!(PromoCode::parse("550e8400-e29b-41d4-a716-446655440000").is_ok());
    /// assert!(PromoCode::parse("SUMMER-SALE").is_err());
    /// ```
    pub fn parse(code: &str) -> ValidationResult<Self> {
        crate::validation::parse_promo_code(code)
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PromoCode {
    type Err = ValidationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        PromoCode::parse(code)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
