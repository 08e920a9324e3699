//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then overridden by command-line flags.

use std::env;
use std::str::FromStr;

use checkout_core::types::PromoCode;
use checkout_core::validation::validate_order_amount;
use checkout_core::{ValidationError, DEFAULT_ORDER_AMOUNT};

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("CHECKOUT_OUTPUT".to_string())),
        }
    }
}

/// Checkout CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Region tokens to quote, in order. Kept raw so unknown tokens reach
    /// the resolver and are reported.
    pub regions: Vec<String>,

    /// Base order amount in whole currency units
    pub order_amount: i64,

    /// Promo code for the single-strategy demo (generated when unset)
    pub promo_code: Option<PromoCode>,

    /// Report format
    pub output: OutputFormat,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            regions: vec!["BE".to_string(), "FR".to_string()],
            order_amount: DEFAULT_ORDER_AMOUNT,
            promo_code: None,
            output: OutputFormat::Text,
        }
    }
}

/// What `main` should do after argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    Help,
}

pub const USAGE: &str = "\
Usage: checkout [OPTIONS]

Options:
  -r, --region <TOKEN>   Region to quote (repeatable, default: BE and FR)
  -a, --amount <N>       Base order amount in whole units (default: 200)
  -c, --code <UUID>      Promo code for the single-discount lookup
      --json             Print the report as JSON
  -h, --help             Show this help message

Environment:
  CHECKOUT_REGIONS       Comma-separated region tokens
  CHECKOUT_ORDER_AMOUNT  Base order amount
  CHECKOUT_PROMO_CODE    Promo code (UUID)
  CHECKOUT_OUTPUT        text | json
  RUST_LOG               Log filter (default: info)";

impl CheckoutConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CheckoutConfig::default();

        if let Some(raw) = lookup("CHECKOUT_REGIONS") {
            config.regions = split_regions(&raw);
        }

        if let Some(raw) = lookup("CHECKOUT_ORDER_AMOUNT") {
            config.order_amount = parse_amount(&raw, "CHECKOUT_ORDER_AMOUNT")?;
        }

        if let Some(raw) = lookup("CHECKOUT_PROMO_CODE") {
            config.promo_code = Some(PromoCode::parse(&raw)?);
        }

        if let Some(raw) = lookup("CHECKOUT_OUTPUT") {
            config.output = raw.parse()?;
        }

        if config.regions.is_empty() {
            return Err(ConfigError::MissingRequired("CHECKOUT_REGIONS".to_string()));
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the loaded configuration.
    ///
    /// `args` excludes the program name. Any `--region` flag replaces the
    /// configured region list.
    pub fn apply_args(&mut self, args: &[String]) -> Result<Command, ConfigError> {
        let mut regions = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-r" | "--region" => {
                    regions.push(flag_value(args, i)?.trim().to_string());
                    i += 1;
                }
                "-a" | "--amount" => {
                    self.order_amount = parse_amount(flag_value(args, i)?, "--amount")?;
                    i += 1;
                }
                "-c" | "--code" => {
                    self.promo_code = Some(PromoCode::parse(flag_value(args, i)?)?);
                    i += 1;
                }
                "--json" => self.output = OutputFormat::Json,
                "-h" | "--help" => return Ok(Command::Help),
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
            i += 1;
        }

        if !regions.is_empty() {
            self.regions = regions;
        }

        Ok(Command::Run)
    }
}

fn split_regions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_amount(raw: &str, name: &str) -> Result<i64, ConfigError> {
    let amount: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))?;
    validate_order_amount(amount)?;
    Ok(amount)
}

fn flag_value(args: &[String], i: usize) -> Result<&str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingRequired(args[i].clone()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Unknown option: {0}")]
    UnknownFlag(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
