//! Derived cart totals.

use crate::cart::Selection;
use crate::catalog::Product;
use crate::money::{self, Currency};
use serde::{Deserialize, Serialize};

/// Totals for the current selection, recomputed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of selected products found in the collection.
    pub count: usize,
    /// Sum of USD-equivalent prices.
    pub usd_total: f64,
    /// Sum of prices expressed in BDT. BDT items contribute their raw
    /// price; USD items are converted with the inverse rate. The total is
    /// NOT re-derived from `usd_total`.
    pub bdt_total: f64,
}

/// Join the selection against the product collection and sum both totals.
///
/// Identifiers in the selection with no matching product are ignored:
/// a stale selection never fails, it just counts for nothing.
pub fn summarize(products: &[Product], selection: &Selection) -> CartSummary {
    let mut summary = CartSummary::default();

    for product in products.iter().filter(|p| selection.contains(&p.id)) {
        summary.count += 1;
        summary.usd_total += product.usd_price();
        summary.bdt_total += match product.currency {
            Currency::Bdt => product.price,
            Currency::Usd => money::to_native(product.price, Currency::Bdt),
        };
    }

    summary
}
