use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A catalog product, keyed by `sku`.
///
/// Missing JSON fields decode to their empty value so that validation, not
/// the decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Stock keeping unit, e.g. `FAL-8406270`
    #[schema(example = "FAL-8406270")]
    pub sku: String,

    #[schema(example = "500 Zapatilla Urbana Mujer")]
    pub name: String,

    #[schema(example = "New Balance")]
    pub brand: String,

    /// Serialized as `null` when absent
    #[schema(example = "40")]
    pub size: Option<String>,

    #[schema(example = 42990.0)]
    pub price: f64,

    #[schema(example = "https://falabella.scene7.com/is/image/Falabella/8406270_1")]
    pub principal_image: String,

    #[serde(deserialize_with = "null_as_default")]
    pub other_images: Vec<String>,
}

impl Product {
    /// Trim surrounding whitespace from the free-text identifying fields.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.sku);
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.brand);
        trim_in_place(&mut self.principal_image);
    }

    /// Consuming variant of [`normalize`](Self::normalize).
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_uses_camel_case_names() {
        let product = Product {
            sku: "FAL-8406270".to_string(),
            principal_image: "https://example.com/x".to_string(),
            other_images: vec!["https://example.com/y".to_string()],
            ..Default::default()
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["principalImage"], "https://example.com/x");
        assert_eq!(value["otherImages"], json!(["https://example.com/y"]));
        assert_eq!(value["size"], serde_json::Value::Null);
    }

    #[test]
    fn test_missing_fields_decode_to_empty_values() {
        let product: Product = serde_json::from_value(json!({ "sku": "FAL-8406270" })).unwrap();

        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.size, None);
        assert!(product.other_images.is_empty());
    }

    #[test]
    fn test_null_other_images_decodes_as_empty() {
        let product: Product = serde_json::from_value(json!({ "otherImages": null })).unwrap();
        assert!(product.other_images.is_empty());
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let product: Product = serde_json::from_value(json!({ "price": 200 })).unwrap();
        assert_eq!(product.price, 200.0);
    }

    #[test]
    fn test_normalize_trims_identifying_fields() {
        let product = Product {
            sku: "  FAL-8406270 ".to_string(),
            name: "\tZapatilla ".to_string(),
            brand: " New Balance".to_string(),
            size: Some(" 40 ".to_string()),
            principal_image: " https://example.com/x\n".to_string(),
            ..Default::default()
        }
        .normalized();

        assert_eq!(product.sku, "FAL-8406270");
        assert_eq!(product.name, "Zapatilla");
        assert_eq!(product.brand, "New Balance");
        assert_eq!(product.principal_image, "https://example.com/x");
        // size is left as sent
        assert_eq!(product.size.as_deref(), Some(" 40 "));
    }
}
