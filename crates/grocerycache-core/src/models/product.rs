use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct Product {
    /// Whole-valued floats such as `7.0` are accepted; `7.5` is not.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub category: String,
    pub name: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl Product {
    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In stock"
        } else {
            "Out of stock"
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Float(f64),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        RawId::Float(id) if id.fract() == 0.0 && id >= i64::MIN as f64 && id < i64::MAX as f64 => {
            Ok(id as i64)
        }
        RawId::Float(id) => Err(de::Error::custom(format!("product id {} is not an integer", id))),
    }
}

/// Keep the products whose category equals `category` exactly.
/// Source order is preserved; an unknown category yields an empty list.
pub fn filter_by_category(catalog: &[Product], category: &str) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, category: &str, name: &str, in_stock: bool) -> Product {
        Product {
            id,
            category: category.to_string(),
            name: name.to_string(),
            in_stock,
        }
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{"id":4643,"category":"coffee","name":"Starbucks Coffee Variety Pack, 100% Arabica","inStock":true}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 4643);
        assert_eq!(p.category, "coffee");
        assert!(p.in_stock);
    }

    #[test]
    fn test_whole_float_id_is_accepted() {
        let json = r#"{"id":12.0,"category":"dairy","name":"Milk","inStock":true}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 12);
        // and written back as an integer
        assert_eq!(serde_json::to_value(&p).unwrap()["id"], 12);
    }

    #[test]
    fn test_fractional_or_textual_id_is_rejected() {
        for id in ["12.5", "1e300", "\"12\"", "null"] {
            let json = format!(r#"{{"id":{},"category":"dairy","name":"Milk","inStock":true}}"#, id);
            assert!(serde_json::from_str::<Product>(&json).is_err(), "accepted id {}", id);
        }
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = serde_json::to_value(product(2, "candy", "Gum", false)).unwrap();
        assert_eq!(json["inStock"], false);
        assert!(json.get("in_stock").is_none());
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let catalog = vec![
            product(3, "dairy", "Milk", true),
            product(1, "coffee", "Espresso", true),
            product(3, "dairy", "Milk", true),
            product(2, "dairy", "Butter", false),
        ];
        let ids: Vec<i64> = filter_by_category(&catalog, "dairy").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 3, 2]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let catalog = vec![product(1, "coffee", "Espresso", true)];
        assert!(filter_by_category(&catalog, "Coffee").is_empty());
        assert!(filter_by_category(&catalog, "coffee ").is_empty());
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let catalog = vec![product(1, "coffee", "Espresso", true)];
        assert!(filter_by_category(&catalog, "dairy").is_empty());
        assert!(filter_by_category(&[], "coffee").is_empty());
    }

    #[test]
    fn test_stock_label() {
        assert_eq!(product(1, "coffee", "Espresso", true).stock_label(), "In stock");
        assert_eq!(product(2, "candy", "Gum", false).stock_label(), "Out of stock");
    }
}
