//! The catalog view facade.

use crate::catalog::Product;
use crate::search::{filter, sort, FilterConfig};

/// Derive the displayed product list from the collection and the current
/// configuration: filter, then order by the configured strategy.
///
/// This is the single entry point the presentation layer calls whenever
/// the collection or the configuration changes. It holds no state and has
/// no side effects; calling it twice with the same inputs yields the same
/// sequence.
pub fn view<'a>(products: &'a [Product], config: &FilterConfig) -> Vec<&'a Product> {
    sort(filter(products, config), config.sort)
}
