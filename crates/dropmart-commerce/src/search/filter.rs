//! Filter configuration and predicate evaluation.

use crate::catalog::{Category, Product};
use crate::error::CatalogError;
use crate::money::Currency;
use crate::search::SortKey;
use serde::{Deserialize, Serialize};

/// Category criterion: a specific department or the "all" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match one category exactly.
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    /// Parse a presentation-layer value: "all" or a department name.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Currency criterion: a specific currency or the "any" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurrencyFilter {
    /// Match every currency.
    #[default]
    Any,
    /// Match one currency exactly.
    Only(Currency),
}

impl CurrencyFilter {
    pub fn matches(&self, currency: Currency) -> bool {
        match self {
            CurrencyFilter::Any => true,
            CurrencyFilter::Only(only) => *only == currency,
        }
    }

    /// Parse a presentation-layer value: "any" or a currency code.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        if s.eq_ignore_ascii_case("any") {
            return Ok(CurrencyFilter::Any);
        }
        Currency::from_code(s)
            .map(CurrencyFilter::Only)
            .ok_or_else(|| CatalogError::UnknownCurrency(s.to_string()))
    }
}

/// The storefront's filter and sort configuration.
///
/// Owned and mutated by the presentation layer; the engine only reads it.
/// `Default` is the page-load state: both wildcards, no search text, no
/// price ceiling, recommended ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Free-text search; trimmed and case-folded before matching.
    pub search: String,
    /// Department criterion.
    pub category: CategoryFilter,
    /// Currency criterion.
    pub currency: CurrencyFilter,
    /// Price ceiling on the common USD scale.
    pub max_price_usd: f64,
    /// Active sort strategy.
    pub sort: SortKey,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            currency: CurrencyFilter::Any,
            max_price_usd: f64::INFINITY,
            sort: SortKey::Recommended,
        }
    }
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category criterion.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the currency criterion.
    pub fn with_currency(mut self, currency: CurrencyFilter) -> Self {
        self.currency = currency;
        self
    }

    /// Set the USD price ceiling.
    pub fn with_max_price(mut self, max_price_usd: f64) -> Self {
        self.max_price_usd = max_price_usd;
        self
    }

    /// Set the sort strategy.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Apply the configured predicates to a product collection.
///
/// Pure function of its inputs: the result is the order-preserving subset
/// of products matching every criterion. The search text is trimmed and
/// lower-cased, then matched as a substring of [`Product::search_text`];
/// an empty search matches everything.
pub fn filter<'a>(products: &'a [Product], config: &FilterConfig) -> Vec<&'a Product> {
    let needle = config.search.trim().to_lowercase();

    products
        .iter()
        .filter(|p| {
            config.category.matches(p.category)
                && config.currency.matches(p.currency)
                && p.usd_price() <= config.max_price_usd
                && (needle.is_empty() || p.search_text().contains(&needle))
        })
        .collect()
}
