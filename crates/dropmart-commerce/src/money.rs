//! Currency support and fixed-rate conversion.
//!
//! The storefront prices products in exactly two currencies and compares
//! them on a common USD scale. Conversion applies one fixed rate and no
//! rounding; formatting for display is a presentation concern handled by
//! [`Currency::display`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed exchange rate: 1 BDT in USD.
pub const BDT_TO_USD: f64 = 0.0091;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Bdt,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Bdt => "BDT",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Bdt => "\u{09f3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "BDT" => Some(Currency::Bdt),
            _ => None,
        }
    }

    /// Format an amount in this currency for display (e.g., "$49.99").
    pub fn display(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol(), amount)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Convert an amount denominated in `currency` to USD.
pub fn to_usd(amount: f64, currency: Currency) -> f64 {
    match currency {
        Currency::Usd => amount,
        Currency::Bdt => amount * BDT_TO_USD,
    }
}

/// Convert a USD amount to the target currency.
pub fn to_native(usd_amount: f64, target: Currency) -> f64 {
    match target {
        Currency::Usd => usd_amount,
        Currency::Bdt => usd_amount / BDT_TO_USD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_is_identity() {
        assert_eq!(to_usd(12.5, Currency::Usd), 12.5);
        assert_eq!(to_native(12.5, Currency::Usd), 12.5);
    }

    #[test]
    fn test_bdt_to_usd() {
        let usd = to_usd(1000.0, Currency::Bdt);
        assert!((usd - 9.1).abs() < 1e-9);
    }

    #[test]
    fn test_usd_to_bdt() {
        let bdt = to_native(10.0, Currency::Bdt);
        assert!((bdt - 10.0 / BDT_TO_USD).abs() < 1e-9);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("bdt"), Some(Currency::Bdt));
        assert_eq!(Currency::from_code("EUR"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Currency::Usd.display(49.999), "$50.00");
        assert_eq!(Currency::Bdt.display(1000.0), "\u{09f3}1000.00");
    }
}
