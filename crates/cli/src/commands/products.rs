//! Product listing command.
//!
//! # Usage
//!
//! ```bash
//! vh-cli products --category soaps --sort price-high
//! vh-cli products --query ghee --currency USD
//! ```

use std::io::Write;

use vedic_hearth_storefront::view::{self, CatalogFilters, ProductCard};

use super::{CliError, Context};

/// Listing parameters as given on the command line.
pub struct ProductsArgs {
    pub category: String,
    pub query: String,
    pub price: String,
    pub sort: String,
    pub currency: Option<String>,
}

/// Print the filtered, sorted product list.
///
/// # Errors
///
/// Returns an error for an unsupported currency or if output fails.
pub fn list(ctx: &Context, args: &ProductsArgs, out: &mut impl Write) -> Result<(), CliError> {
    let state = ctx.initial_state(args.currency.as_deref())?;
    let filters = CatalogFilters::from_params(&args.category, &args.query, &args.price, &args.sort);
    let view = view::derive(&ctx.catalog, &state, &filters);

    tracing::info!(
        category = filters.category.as_str(),
        price = %filters.price,
        sort = filters.sort.as_str(),
        shown = view.products.len(),
        "Listing products"
    );

    for card in &view.products {
        writeln!(out, "{}", card_line(card))?;
    }
    writeln!(out, "{} of {} products", view.products.len(), ctx.catalog.len())?;
    Ok(())
}

fn card_line(card: &ProductCard) -> String {
    let product = &card.product;
    let mut line = format!(
        "{:>3}  {:<45} {:>10}  {}",
        product.id.as_str(),
        product.name,
        card.price,
        product.category.label()
    );
    if let (Some(original), Some(savings)) = (&card.original_price, &card.savings) {
        line.push_str(&format!("  was {original}, save {savings}"));
    }
    if !card.can_add_to_cart {
        line.push_str("  [out of stock]");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, output};

    fn args(category: &str, query: &str, price: &str, sort: &str) -> ProductsArgs {
        ProductsArgs {
            category: category.to_owned(),
            query: query.to_owned(),
            price: price.to_owned(),
            sort: sort.to_owned(),
            currency: None,
        }
    }

    #[test]
    fn test_list_soaps_by_price_high() {
        let ctx = context();
        let text = output(|out| list(&ctx, &args("soaps", "", "all", "price-high"), out));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Combo Pack"));
        assert!(lines[0].contains("₹399"));
        assert!(lines[0].contains("was ₹500, save ₹101"));
        assert!(lines[1].contains("Soap - 100g"));
        assert_eq!(lines[2], "2 of 8 products");
    }

    #[test]
    fn test_list_marks_out_of_stock() {
        let ctx = context();
        let text = output(|out| list(&ctx, &args("all", "dhoop", "all", "featured"), out));
        assert!(text.contains("[out of stock]"));
        assert!(text.ends_with("1 of 8 products\n"));
    }

    #[test]
    fn test_list_in_other_currency() {
        let ctx = context();
        let mut request = args("cow-ghee", "", "all", "price-low");
        request.currency = Some("eur".to_owned());
        let text = output(|out| list(&ctx, &request, out));
        assert!(text.lines().next().is_some_and(|line| line.contains("€899")));
    }

    #[test]
    fn test_list_rejects_unknown_currency() {
        let ctx = context();
        let mut request = args("all", "", "all", "featured");
        request.currency = Some("JPY".to_owned());
        let mut buf = Vec::new();
        assert!(list(&ctx, &request, &mut buf).is_err());
    }
}
