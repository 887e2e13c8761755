//! Sort strategies for the catalog view.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Sort strategy for the displayed product list.
///
/// The set is closed: dispatch is an exhaustive match, so an unknown
/// strategy cannot exist past the string-parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most popular first.
    #[default]
    Recommended,
    /// USD-equivalent price, low to high.
    PriceAsc,
    /// USD-equivalent price, high to low.
    PriceDesc,
    /// Fastest fulfillment first; unparsable estimates last.
    Fulfillment,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Fulfillment => "fulfillment",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "recommended" => Some(SortKey::Recommended),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "fulfillment" => Some(SortKey::Fulfillment),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Recommended => "Recommended",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Fulfillment => "Fastest Fulfillment",
        }
    }
}

/// Order a sequence of products by the given strategy.
///
/// Consumes and returns the sequence; the underlying collection is never
/// touched. All strategies use a stable sort, so products that compare
/// equal keep their relative input order.
pub fn sort<'a>(mut items: Vec<&'a Product>, key: SortKey) -> Vec<&'a Product> {
    match key {
        SortKey::Recommended => items.sort_by_key(|p| Reverse(p.popularity)),
        SortKey::PriceAsc => items.sort_by(|a, b| a.usd_price().total_cmp(&b.usd_price())),
        SortKey::PriceDesc => items.sort_by(|a, b| b.usd_price().total_cmp(&a.usd_price())),
        SortKey::Fulfillment => {
            items.sort_by(|a, b| a.fulfillment_hours().total_cmp(&b.fulfillment_hours()))
        }
    }
    items
}

/// Convenience: collect a slice into an ordered sequence.
pub fn sorted<'a>(products: &'a [Product], key: SortKey) -> Vec<&'a Product> {
    sort(products.iter().collect(), key)
}
