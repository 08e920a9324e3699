//! Report assembly and rendering.
//!
//! The core returns values only; everything printed by the CLI is built
//! here.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use checkout_core::types::{DiscountPercentage, PromoCode};
use checkout_core::{
    resolve_discount_by_code, resolve_discount_by_country, Checkout, DiscountProvider,
    OrderQuote, PricingResult,
};

use crate::config::CheckoutConfig;

/// A region token the family resolver refused.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedRegion {
    pub token: String,
    pub reason: String,
}

/// Single-strategy lookups for one country token and one promo code.
#[derive(Debug, Clone, Serialize)]
pub struct SingleDiscounts {
    pub country_token: String,
    pub country_discount: DiscountPercentage,
    pub promo_code: PromoCode,
    pub promo_discount: DiscountPercentage,
}

/// Everything the CLI prints for one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub quotes: Vec<OrderQuote>,
    pub rejected_regions: Vec<RejectedRegion>,
    pub single_discounts: SingleDiscounts,
}

impl Report {
    /// Resolves and prices every configured region.
    ///
    /// Unknown regions are collected, not fatal.
    pub fn build(config: &CheckoutConfig) -> Self {
        let mut quotes = Vec::new();
        let mut rejected_regions = Vec::new();

        for token in &config.regions {
            match quote_region(token, config.order_amount) {
                Ok(quote) => {
                    info!(region = %quote.region, total = %quote.total, "Region quoted");
                    quotes.push(quote);
                }
                Err(e) => {
                    warn!(token = %token, error = %e, "Region rejected");
                    rejected_regions.push(RejectedRegion {
                        token: token.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let country_token = config
            .regions
            .first()
            .cloned()
            .unwrap_or_else(|| "BE".to_string());
        let promo_code = config.promo_code.unwrap_or_else(PromoCode::generate);

        let single_discounts = SingleDiscounts {
            country_discount: resolve_discount_by_country(&country_token).discount_percentage(),
            country_token,
            promo_discount: resolve_discount_by_code(promo_code).discount_percentage(),
            promo_code,
        };

        Report {
            generated_at: Utc::now(),
            quotes,
            rejected_regions,
            single_discounts,
        }
    }

    /// JSON rendering.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain-text rendering.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checkout quotes")?;
        writeln!(f, "===============")?;
        for quote in &self.quotes {
            writeln!(
                f,
                "[{}] base {}  discount {} (-{})  shipping {}  total {}",
                quote.region,
                quote.base_amount,
                quote.discount_percentage,
                quote.discount_amount,
                quote.shipping_cost,
                quote.total
            )?;
        }
        for rejected in &self.rejected_regions {
            writeln!(f, "[{}] rejected: {}", rejected.token, rejected.reason)?;
        }

        let single = &self.single_discounts;
        writeln!(f)?;
        writeln!(f, "Single discounts")?;
        writeln!(f, "================")?;
        writeln!(f, "country {}: {}", single.country_token, single.country_discount)?;
        writeln!(f, "code {}: {}", single.promo_code, single.promo_discount)
    }
}

fn quote_region(token: &str, order_amount: i64) -> PricingResult<OrderQuote> {
    Ok(Checkout::for_region(token, order_amount)?.quote())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report() {
        let report = Report::build(&CheckoutConfig::default());

        let totals: Vec<String> = report.quotes.iter().map(|q| q.total.to_string()).collect();
        assert_eq!(totals, vec!["180.00", "205.00"]);
        assert!(report.rejected_regions.is_empty());
        assert_eq!(report.single_discounts.country_discount.value(), 20);
        assert_eq!(report.single_discounts.promo_discount.value(), 15);
    }

    #[test]
    fn test_unknown_region_is_reported_not_fatal() {
        let config = CheckoutConfig {
            regions: vec!["XX".to_string(), "FR".to_string()],
            ..CheckoutConfig::default()
        };
        let report = Report::build(&config);

        assert_eq!(report.quotes.len(), 1);
        assert_eq!(report.rejected_regions.len(), 1);
        assert_eq!(report.rejected_regions[0].reason, "Unknown region: XX");
        // Single-strategy path falls back instead of failing
        assert_eq!(report.single_discounts.country_discount.value(), 10);
    }

    #[test]
    fn test_text_rendering() {
        let text = Report::build(&CheckoutConfig::default()).to_string();
        assert!(text.contains("[BE] base 200.00  discount 20% (-40.00)  shipping 20.00  total 180.00"));
        assert!(text.contains("[FR] base 200.00  discount 10% (-20.00)  shipping 25.00  total 205.00"));
        assert!(text.contains("country BE: 20%"));
        assert!(text.starts_with("Checkout quotes\n"));
        assert!(text.ends_with("15%\n"));
    }

    #[test]
    fn test_text_rendering_lists_rejected_regions() {
        let config = CheckoutConfig {
            regions: vec!["be".to_string()],
            ..CheckoutConfig::default()
        };
        let text = Report::build(&config).to_string();
        assert!(text.contains("[be] rejected: Unknown region: be"));
        assert!(text.contains("country be: 10%"));
    }

    #[test]
    fn test_json_rendering() {
        let json = Report::build(&CheckoutConfig::default()).render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["quotes"][0]["total"], 18_000);
        assert_eq!(value["single_discounts"]["promo_discount"], 15);
    }
}
