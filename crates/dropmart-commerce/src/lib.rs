//! Catalog query and selection engine for the dropmart storefront.
//!
//! This crate provides the data-transformation core behind the storefront
//! page:
//!
//! - **Catalog**: immutable product records and the fulfillment-time parser
//! - **Search**: filter configuration, stable sorting, the catalog view
//! - **Cart**: the selection set and derived totals in both currencies
//! - **Money**: fixed-rate conversion between USD and BDT
//!
//! Everything here is synchronous and pure: the presentation layer owns the
//! mutable `FilterConfig` and `Selection`, supplies the read-only product
//! collection, and re-derives the view and cart summary after each change.
//!
//! # Example
//!
//! ```rust,ignore
//! use dropmart_commerce::prelude::*;
//!
//! let products = catalog::from_json(include_str!("products.json"))?;
//!
//! let config = FilterConfig::default()
//!     .with_search("charger")
//!     .with_sort(SortKey::PriceAsc);
//! let visible = view(&products, &config);
//!
//! let mut selection = Selection::new();
//! selection.toggle(visible[0].id.clone());
//! let summary = summarize(&products, &selection);
//! println!("{} items, {}", summary.count, Currency::Usd.display(summary.usd_total));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, BDT_TO_USD};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{self, Currency, BDT_TO_USD};

    // Catalog
    pub use crate::catalog::{self, parse_hours, Category, Product};

    // Search
    pub use crate::search::{
        filter, sort, sorted, view, CategoryFilter, CurrencyFilter, FilterConfig, SortKey,
    };

    // Cart
    pub use crate::cart::{summarize, CartSummary, Selection};
}
