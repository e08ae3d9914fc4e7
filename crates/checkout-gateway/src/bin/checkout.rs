//! # Checkout CLI
//!
//! Builds a cart from the command line and optionally applies a coupon
//! through the coupon-lookup service.
//!
//! ## Usage
//! ```bash
//! # Show the cart total
//! cargo run -p checkout-gateway --bin checkout -- --item camisa:1:100 --item meia:2:20
//!
//! # Apply a percentage coupon
//! cargo run -p checkout-gateway --bin checkout -- \
//!     --item camisa:1:100 --item meia:2:20 --coupon CUPOM10P --kind percentage
//!
//! # Point at another coupon service
//! cargo run -p checkout-gateway --bin checkout -- \
//!     --url http://coupons.internal:3000 --item caneta:1:5 --coupon CUPOM15 --kind fixed
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use checkout_core::{Cart, CouponKind};
use checkout_gateway::{GatewayConfig, HttpCouponGateway};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "checkout", about = "Build a cart and apply a coupon to it")]
struct Args {
    /// Line item as NAME:QUANTITY:UNIT_PRICE (repeatable)
    #[arg(long = "item", value_name = "NAME:QTY:PRICE", value_parser = parse_item, required = true)]
    items: Vec<ItemArg>,

    /// Coupon code to apply
    #[arg(long)]
    coupon: Option<String>,

    /// Discount strategy the coupon must have (percentage | fixed)
    #[arg(long, default_value = "percentage")]
    kind: CouponKind,

    /// Path to coupon-gateway.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Coupon service base URL (overrides config and environment)
    #[arg(long)]
    url: Option<String>,
}

#[derive(Debug, Clone)]
struct ItemArg {
    name: String,
    quantity: f64,
    unit_price: f64,
}

/// Parses `NAME:QTY:PRICE`, splitting from the right so names may contain ':'.
fn parse_item(raw: &str) -> Result<ItemArg, String> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(price), Some(quantity), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected NAME:QTY:PRICE, got '{raw}'"));
    };

    Ok(ItemArg {
        name: name.to_string(),
        quantity: quantity
            .parse()
            .map_err(|_| format!("quantity '{quantity}' is not a number"))?,
        unit_price: price
            .parse()
            .map_err(|_| format!("price '{price}' is not a number"))?,
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "checkout failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = Cart::new();
    for item in &args.items {
        cart.add_item(&item.name, item.quantity, item.unit_price)?;
    }

    for item in cart.list_items() {
        println!(
            "{:<20} {:>5} x {:>10.2} = {:>10.2}",
            item.name(),
            item.quantity(),
            item.unit_price(),
            item.line_total()
        );
    }
    println!("{:<20} {:>32.2}", "TOTAL", cart.calculate_total());

    let Some(code) = args.coupon.as_deref() else {
        return Ok(());
    };

    let mut config = GatewayConfig::load(args.config)?;
    if let Some(url) = args.url {
        config.base_url = url;
    }
    info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Configuration loaded");

    let gateway = HttpCouponGateway::new(&config)?;
    let discounted = cart.apply_coupon(&gateway, code, args.kind).await?;

    println!("{:<20} {:>32.2}", format!("{} ({})", code, args.kind), discounted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let item = parse_item("camisa:1:100").unwrap();
        assert_eq!(item.name, "camisa");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit_price, 100.0);

        let item = parse_item("cabo usb:c:2:9.90").unwrap();
        assert_eq!(item.name, "cabo usb:c");
        assert_eq!(item.unit_price, 9.9);

        let item = parse_item("queijo:0.5:40").unwrap();
        assert_eq!(item.quantity, 0.5);
    }

    #[test]
    fn test_parse_item_errors() {
        assert!(parse_item("camisa:1").is_err());
        assert!(parse_item("camisa:um:100").is_err());
        assert!(parse_item("camisa:1:cem").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from([
            "checkout", "--item", "caneta:1:5", "--coupon", "CUPOM15", "--kind", "fixo",
        ])
        .unwrap();
        assert_eq!(args.items.len(), 1);
        assert_eq!(args.kind, CouponKind::Fixed);
        assert_eq!(args.coupon.as_deref(), Some("CUPOM15"));

        assert!(Args::try_parse_from(["checkout"]).is_err());
    }
}
