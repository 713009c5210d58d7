//! Cart command: apply cart edits and print the order summary.
//!
//! Edits are applied in a fixed order: all `--add`, then `--set`, then
//! `--remove`.
//!
//! # Usage
//!
//! ```bash
//! vh-cli cart --add 1 --add 2 --set 1=2 --coupon SACRED15
//! ```

use std::io::Write;
use std::sync::Arc;

use vedic_hearth_core::ProductId;
use vedic_hearth_storefront::AppError;
use vedic_hearth_storefront::checkout::{Coupon, OrderSummary};
use vedic_hearth_storefront::state::{Command, StoreState};

use super::{CliError, Context};

/// Cart edits as given on the command line.
pub struct CartArgs {
    pub add: Vec<String>,
    /// `ID=QTY` pairs.
    pub set: Vec<String>,
    pub remove: Vec<String>,
    pub coupon: Option<String>,
    pub currency: Option<String>,
}

/// Build the cart and print its lines and order summary.
///
/// # Errors
///
/// Returns an error if a product to add is not in the catalog, a `--set`
/// value is malformed, the coupon is invalid, or output fails.
pub fn summarize(ctx: &Context, args: &CartArgs, out: &mut impl Write) -> Result<(), CliError> {
    let state = build_cart(ctx, args)?;
    let coupon = args
        .coupon
        .as_deref()
        .map(str::parse::<Coupon>)
        .transpose()
        .map_err(AppError::from)?;
    let summary = OrderSummary::compute(
        state.cart(),
        coupon,
        state.currency(),
        &ctx.config.shipping,
    );

    tracing::info!(
        lines = state.cart().len(),
        items = summary.item_count,
        coupon = coupon.map(Coupon::code),
        "Cart summarized"
    );

    if state.cart().is_empty() {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    }

    for line in state.cart() {
        writeln!(
            out,
            "{:>3}  {:<45} {:>4} x {:>8} = {:>10}",
            line.product.id.as_str(),
            line.product.name,
            line.quantity,
            summary.format(line.product.price),
            summary.format(line.line_total()),
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Subtotal ({} items): {}",
        summary.item_count,
        summary.format(summary.subtotal)
    )?;
    if let Some(coupon) = summary.coupon {
        writeln!(out, "Discount ({coupon}): -{}", summary.format(summary.discount))?;
    }
    if summary.ships_free() {
        writeln!(out, "Shipping: Free")?;
    } else {
        writeln!(out, "Shipping: {}", summary.format(summary.shipping))?;
    }
    writeln!(out, "Total: {}", summary.format(summary.total))?;
    if let Some(remaining) = summary.remaining_for_free_shipping {
        writeln!(
            out,
            "Add {} more for free shipping",
            summary.format(remaining)
        )?;
    }
    Ok(())
}

fn build_cart(ctx: &Context, args: &CartArgs) -> Result<StoreState, CliError> {
    let mut state = ctx.initial_state(args.currency.as_deref())?;

    for id in &args.add {
        let id = ProductId::new(id.trim());
        let product = ctx
            .catalog
            .get(&id)
            .ok_or_else(|| AppError::ProductNotFound(id.clone()))?;
        state = state.apply(&Command::AddToCart(Arc::clone(product)));
    }

    for pair in &args.set {
        let (id, quantity) = parse_set(pair)?;
        state = state.apply(&Command::SetCartQuantity { id, quantity });
    }

    for id in &args.remove {
        state = state.apply(&Command::RemoveFromCart(ProductId::new(id.trim())));
    }

    Ok(state)
}

/// Parse an `ID=QTY` pair.
fn parse_set(pair: &str) -> Result<(ProductId, i64), AppError> {
    let malformed = || AppError::BadRequest(format!("expected ID=QTY, got '{pair}'"));
    let (id, quantity) = pair.split_once('=').ok_or_else(malformed)?;
    let id = id.trim();
    if id.is_empty() {
        return Err(malformed());
    }
    let quantity = quantity.trim().parse::<i64>().map_err(|_| malformed())?;
    Ok((ProductId::new(id), quantity))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, output};

    fn args(add: &[&str], set: &[&str], coupon: Option<&str>) -> CartArgs {
        CartArgs {
            add: add.iter().map(|s| (*s).to_owned()).collect(),
            set: set.iter().map(|s| (*s).to_owned()).collect(),
            remove: Vec::new(),
            coupon: coupon.map(str::to_owned),
            currency: None,
        }
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_set("1=3").unwrap(), (ProductId::new("1"), 3));
        assert_eq!(parse_set(" 2 = -1 ").unwrap(), (ProductId::new("2"), -1));
        assert!(parse_set("1").is_err());
        assert!(parse_set("=3").is_err());
        assert!(parse_set("1=lots").is_err());
    }

    #[test]
    fn test_summary_with_coupon() {
        let ctx = context();
        let text = output(|out| summarize(&ctx, &args(&["1", "2"], &["1=2"], Some("sacred15")), out));

        assert!(text.contains("Subtotal (3 items): ₹2,097"));
        assert!(text.contains("Discount (SACRED15): -₹210"));
        assert!(text.contains("Shipping: ₹299"));
        assert!(text.contains("Total: ₹2,186"));
        assert!(text.contains("Add ₹2,903 more for free shipping"));
    }

    #[test]
    fn test_free_shipping() {
        let ctx = context();
        let text = output(|out| summarize(&ctx, &args(&["4"], &["4=3"], None), out));
        assert!(text.contains("Shipping: Free"));
        assert!(text.contains("Total: ₹7,497"));
        assert!(!text.contains("more for free shipping"));
    }

    #[test]
    fn test_remove_and_zero_quantity_empty_the_cart() {
        let ctx = context();
        let mut request = args(&["1", "2"], &["2=0"], None);
        request.remove = vec!["1".to_owned()];
        let text = output(|out| summarize(&ctx, &request, out));
        assert_eq!(text, "Your cart is empty\n");
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let ctx = context();
        let mut buf = Vec::new();
        let err = summarize(&ctx, &args(&["99"], &[], None), &mut buf).unwrap_err();
        assert_eq!(err.to_string(), "Product not found: 99");
    }

    #[test]
    fn test_invalid_coupon_is_an_error() {
        let ctx = context();
        let mut buf = Vec::new();
        let err = summarize(&ctx, &args(&["1"], &[], Some("FREE")), &mut buf).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid coupon code. Try WELCOME10, SACRED15, or VEDIC20"
        );
    }
}
