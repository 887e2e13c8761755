//! Product catalog module.
//!
//! Contains the immutable product record, the department set, and the
//! fulfillment-time parser.

mod category;
mod fulfillment;
mod product;

pub use category::Category;
pub use fulfillment::parse_hours;
pub use product::Product;

use crate::error::CatalogError;

/// Deserialize a product collection from JSON.
///
/// The storefront loads its collection once from a static source and
/// treats it as read-only from then on; this is that loading step. The
/// caller supplies the bytes, so the engine itself performs no I/O.
pub fn from_json(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "id": "p-1",
            "name": "USB-C Charger",
            "description": "65W wall charger",
            "category": "electronics",
            "currency": "USD",
            "price": 19.5,
            "popularity": 7,
            "fulfillmentTime": "24 hours",
            "minOrder": 1,
            "origin": "Shenzhen",
            "margin": "30-40%",
            "badges": ["fast-moving"],
            "image": "charger.webp"
        }]"#;

        let products = from_json(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "p-1");
        assert_eq!(products[0].category, Category::Electronics);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(from_json("not json").is_err());
        assert!(from_json(r#"[{"id": "p-1"}]"#).is_err());
    }
}
