//! # Checkout CLI
//!
//! Prints checkout quotes for the configured regions.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  env + flags ──► CheckoutConfig ──► Report::build ──► stdout           │
//! │                                          │                              │
//! │                                          ├── resolve_family (per region)│
//! │                                          ├── resolve_discount_by_country│
//! │                                          └── resolve_discount_by_code   │
//! │                                                                         │
//! │  Logs go to stderr so `--json` output stays machine-readable.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p checkout-cli -- --region BE --region FR --amount 250
//! CHECKOUT_OUTPUT=json cargo run -p checkout-cli
//! ```

mod config;
mod report;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CheckoutConfig, Command, OutputFormat, USAGE};
use crate::report::Report;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = CheckoutConfig::load()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    if config.apply_args(&args)? == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    info!(
        regions = ?config.regions,
        amount = config.order_amount,
        output = ?config.output,
        "Configuration loaded"
    );

    let report = Report::build(&config);

    match config.output {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    info!(
        quoted = report.quotes.len(),
        rejected = report.rejected_regions.len(),
        "Checkout run complete"
    );
    Ok(())
}
