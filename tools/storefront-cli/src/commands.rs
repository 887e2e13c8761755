//! Command implementations over the catalog engine.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use dropmart_commerce::prelude::*;

use crate::output::Output;

/// Bundled product collection used when no catalog file is given.
const BUNDLED_CATALOG: &str = include_str!("../data/products.json");

/// Load the product collection once; it is read-only from here on.
pub fn load_catalog(path: Option<&str>) -> Result<Vec<Product>> {
    let products = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {}", path))?;
            catalog::from_json(&json).context("parsing catalog file")?
        }
        None => catalog::from_json(BUNDLED_CATALOG).context("parsing bundled catalog")?,
    };
    debug!(count = products.len(), "catalog loaded");
    Ok(products)
}

#[derive(Args)]
pub struct ListArgs {
    /// Free-text search over name, description, and badges
    #[arg(short, long, default_value = "")]
    search: String,

    /// Department filter: "all" or a department name
    #[arg(long, default_value = "all")]
    category: String,

    /// Currency filter: "any", "USD", or "BDT"
    #[arg(long, default_value = "any")]
    currency: String,

    /// Price ceiling in USD-equivalent terms
    #[arg(long)]
    max_price: Option<f64>,

    /// Sort strategy: recommended, price-asc, price-desc, fulfillment
    #[arg(long, default_value = "recommended")]
    sort: String,
}

pub fn list(args: ListArgs, products: &[Product], out: &Output) -> Result<()> {
    let sort = SortKey::from_str(&args.sort)
        .ok_or_else(|| CatalogError::UnknownSortKey(args.sort.clone()))?;

    let config = FilterConfig::default()
        .with_search(args.search)
        .with_category(CategoryFilter::parse(&args.category)?)
        .with_currency(CurrencyFilter::parse(&args.currency)?)
        .with_max_price(args.max_price.unwrap_or(f64::INFINITY))
        .with_sort(sort);

    debug!(sort = config.sort.as_str(), "deriving catalog view");
    let visible = view(products, &config);

    out.header(&format!(
        "{} ({} of {} products)",
        config.sort.display_name(),
        visible.len(),
        products.len()
    ));
    for product in &visible {
        out.product_row(product);
    }
    if visible.is_empty() {
        out.info("No products match the current filters.");
    }

    Ok(())
}

#[derive(Args)]
pub struct CartArgs {
    /// Toggle a product id into the selection (repeatable)
    #[arg(short = 'i', long = "select")]
    select: Vec<String>,

    /// Start from every product in the catalog selected
    #[arg(long)]
    all: bool,

    /// Start from an empty selection (the default)
    #[arg(long, conflicts_with = "all")]
    clear: bool,
}

pub fn cart(args: CartArgs, products: &[Product], out: &Output) -> Result<()> {
    let mut selection = Selection::new();

    if args.all {
        selection.select_all(products.iter().map(|p| p.id.clone()));
    }
    if args.clear {
        selection.clear();
    }

    for id in &args.select {
        let selected = selection.toggle(ProductId::new(id.as_str()));
        debug!(id = %id, selected, "toggled selection");
        if !products.iter().any(|p| p.id.as_str() == id) {
            out.warn(&format!(
                "{} is not in the catalog and will not affect totals",
                id
            ));
        }
    }

    let summary = summarize(products, &selection);

    out.header("Cart estimate");
    for product in products.iter().filter(|p| selection.contains(&p.id)) {
        out.product_row(product);
    }
    out.info(&format!("{} products selected", summary.count));
    out.success(&format!(
        "Estimated total: {} ({})",
        Currency::Usd.display(summary.usd_total),
        Currency::Bdt.display(summary.bdt_total)
    ));

    Ok(())
}
