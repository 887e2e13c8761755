//! The product record.

use crate::catalog::{parse_hours, Category};
use crate::ids::ProductId;
use crate::money::{self, Currency};
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
///
/// Products are supplied by an external source and never mutated by the
/// engine; every derived view is computed over a read-only slice of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, stable across the collection.
    pub id: ProductId,
    /// Product name, indexed for search.
    pub name: String,
    /// Full description, indexed for search.
    pub description: String,
    /// Department this product belongs to.
    pub category: Category,
    /// Currency the price is denominated in.
    pub currency: Currency,
    /// Non-negative price in `currency`.
    pub price: f64,
    /// Ranking signal for the default sort.
    pub popularity: u32,
    /// Free-text fulfillment estimate (e.g., "24 hours", "2-3 days").
    pub fulfillment_time: String,
    /// Minimum order quantity.
    pub min_order: u32,
    /// Fulfillment location, display only.
    pub origin: String,
    /// Margin note, display only.
    pub margin: String,
    /// Short labels shown on the card; also indexed for search.
    #[serde(default)]
    pub badges: Vec<String>,
    /// Reference to display media, opaque to the engine.
    pub image: String,
}

impl Product {
    /// The lower-cased text the search filter matches against: name,
    /// description, and badge labels, space-joined. Products without
    /// badges simply contribute nothing for that part.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.badges.join(" ")).to_lowercase()
    }

    /// The product's price on the common USD scale.
    pub fn usd_price(&self) -> f64 {
        money::to_usd(self.price, self.currency)
    }

    /// Comparable fulfillment estimate in hours; infinity when the
    /// free-text estimate has no recognizable duration.
    pub fn fulfillment_hours(&self) -> f64 {
        parse_hours(&self.fulfillment_time)
    }
}
