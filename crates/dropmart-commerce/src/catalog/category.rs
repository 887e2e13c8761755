//! The storefront's department set.

use serde::{Deserialize, Serialize};

/// A product department. The set is fixed at compile time; filter values
/// outside it never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Fashion,
    HomeLiving,
    Beauty,
    Fitness,
    Toys,
}

impl Category {
    /// All departments, in display order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::HomeLiving,
        Category::Beauty,
        Category::Fitness,
        Category::Toys,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::HomeLiving => "home-living",
            Category::Beauty => "beauty",
            Category::Fitness => "fitness",
            Category::Toys => "toys",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "fashion" => Some(Category::Fashion),
            "home-living" => Some(Category::HomeLiving),
            "beauty" => Some(Category::Beauty),
            "fitness" => Some(Category::Fitness),
            "toys" => Some(Category::Toys),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeLiving => "Home & Living",
            Category::Beauty => "Beauty",
            Category::Fitness => "Fitness",
            Category::Toys => "Toys",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Category::from_str("Electronics"), Some(Category::Electronics));
        assert_eq!(Category::from_str("HOME-LIVING"), Some(Category::HomeLiving));
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(Category::from_str("groceries"), None);
    }
}
