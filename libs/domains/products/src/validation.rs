//! Field rules for incoming products.
//!
//! Rules run in a fixed order and a later failing rule for the same field
//! replaces the earlier message, so each field reports at most one error.

use std::collections::BTreeMap;
use validator::{ValidateLength, ValidateUrl};

use crate::models::Product;

/// Field name to message. Empty means the product is valid.
pub type ValidationErrors = BTreeMap<String, String>;

pub const PRODUCT_REQUIRED: &str = "product is required";
pub const SKU_REQUIRED: &str = "sku is required";
pub const SKU_FORMAT: &str = "sku must be in format: AAA-1234567";
pub const NAME_REQUIRED: &str = "name is required";
pub const NAME_LENGTH: &str = "name must be between 3 and 50 characters";
pub const BRAND_REQUIRED: &str = "brand is required";
pub const BRAND_LENGTH: &str = "brand must be between 3 and 50 characters";
pub const SIZE_EMPTY: &str = "size cannot be empty";
pub const PRICE_RANGE: &str = "price must be between 1.00 and 99999999.00";
pub const PRINCIPAL_IMAGE_REQUIRED: &str = "principalImage is required";
pub const PRINCIPAL_IMAGE_URL: &str = "principalImage is not a valid url";
pub const IMAGE_URL: &str = "is not a valid url";

const MIN_TEXT_LEN: u64 = 3;
const MAX_TEXT_LEN: u64 = 50;
const MIN_SKU_SUFFIX_LEN: u64 = 7;
const MAX_SKU_SUFFIX_LEN: u64 = 8;
const MIN_PRICE: f64 = 1.00;
const MAX_PRICE: f64 = 99_999_999.00;

/// Check a candidate product against every field rule.
///
/// Values are evaluated trimmed, so the result is the same whether or not
/// the caller ran [`Product::normalize`] first.
pub fn validate(product: Option<&Product>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let Some(product) = product else {
        errors.insert("product".to_string(), PRODUCT_REQUIRED.to_string());
        return errors;
    };

    let mut fail = |field: &str, message: &str| {
        errors.insert(field.to_string(), message.to_string());
    };

    let sku = product.sku.trim();
    if sku.is_empty() {
        fail("sku", SKU_REQUIRED);
    }
    if !is_valid_sku(sku) {
        fail("sku", SKU_FORMAT);
    }

    let name = product.name.trim();
    if name.is_empty() {
        fail("name", NAME_REQUIRED);
    }
    if !name.validate_length(Some(MIN_TEXT_LEN), Some(MAX_TEXT_LEN), None) {
        fail("name", NAME_LENGTH);
    }

    let brand = product.brand.trim();
    if brand.is_empty() {
        fail("brand", BRAND_REQUIRED);
    }
    if !brand.validate_length(Some(MIN_TEXT_LEN), Some(MAX_TEXT_LEN), None) {
        fail("brand", BRAND_LENGTH);
    }

    if product.size.as_deref().is_some_and(str::is_empty) {
        fail("size", SIZE_EMPTY);
    }

    // NaN fails both comparisons
    if !(product.price > MIN_PRICE && product.price < MAX_PRICE) {
        fail("price", PRICE_RANGE);
    }

    let principal_image = product.principal_image.trim();
    if principal_image.is_empty() {
        fail("principalImage", PRINCIPAL_IMAGE_REQUIRED);
    }
    if !is_valid_url(principal_image) {
        fail("principalImage", PRINCIPAL_IMAGE_URL);
    }

    for (index, image) in product.other_images.iter().enumerate() {
        if !is_valid_url(image) {
            fail(&format!("otherImages[{index}]"), IMAGE_URL);
        }
    }

    errors
}

/// Absolute URL taken as written. `Url::parse` drops surrounding spaces and
/// control characters, so those are rejected before it sees the value.
fn is_valid_url(value: &str) -> bool {
    value == value.trim() && !value.chars().any(char::is_control) && value.validate_url()
}

/// `PREFIX-SUFFIX` with exactly one dash and a 7 or 8 character suffix.
fn is_valid_sku(sku: &str) -> bool {
    let mut parts = sku.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(suffix), None) => suffix.validate_length(
            Some(MIN_SKU_SUFFIX_LEN),
            Some(MAX_SKU_SUFFIX_LEN),
            None,
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product() -> Product {
        Product {
            sku: "FAL-8406270".to_string(),
            name: "500 Zapatilla Urbana Mujer".to_string(),
            brand: "New Balance".to_string(),
            size: Some("40".to_string()),
            price: 200.00,
            principal_image: "https://example.com/x".to_string(),
            other_images: vec![],
        }
    }

    #[test]
    fn test_valid_product_has_no_errors() {
        assert!(validate(Some(&valid_product())).is_empty());
    }

    #[test]
    fn test_absent_product_reports_only_product() {
        let errors = validate(None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["product"], PRODUCT_REQUIRED);
    }

    #[test]
    fn test_empty_sku_is_reported() {
        let product = Product {
            sku: String::new(),
            ..valid_product()
        };
        let errors = validate(Some(&product));
        // the format rule runs last and replaces the required message
        assert_eq!(errors["sku"], SKU_FORMAT);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_sku_format() {
        for sku in ["FAL-8406270", "FAL-84062701", "X-abcdefg"] {
            let product = Product {
                sku: sku.to_string(),
                ..valid_product()
            };
            assert!(validate(Some(&product)).is_empty(), "{sku} should be valid");
        }

        for sku in ["FAL8406270", "FAL-840627", "FAL-840627012", "FAL-8406-270", "FAL-"] {
            let product = Product {
                sku: sku.to_string(),
                ..valid_product()
            };
            assert_eq!(
                validate(Some(&product)).get("sku").map(String::as_str),
                Some(SKU_FORMAT),
                "{sku} should be rejected"
            );
        }
    }

    #[test]
    fn test_short_name_and_empty_brand() {
        let product = Product {
            name: "ab".to_string(),
            brand: "   ".to_string(),
            ..valid_product()
        };
        let errors = validate(Some(&product));
        assert_eq!(errors["name"], NAME_LENGTH);
        assert_eq!(errors["brand"], BRAND_LENGTH);
    }

    #[test]
    fn test_length_counts_characters() {
        let product = Product {
            name: "ñññ".to_string(),
            brand: "é".repeat(50),
            ..valid_product()
        };
        assert!(validate(Some(&product)).is_empty());

        let product = Product {
            name: "x".repeat(51),
            ..valid_product()
        };
        assert_eq!(validate(Some(&product))["name"], NAME_LENGTH);
    }

    #[test]
    fn test_size_may_be_absent_but_not_empty() {
        let absent = Product {
            size: None,
            ..valid_product()
        };
        assert!(validate(Some(&absent)).is_empty());

        let empty = Product {
            size: Some(String::new()),
            ..valid_product()
        };
        assert_eq!(validate(Some(&empty))["size"], SIZE_EMPTY);
    }

    #[test]
    fn test_price_bounds_are_exclusive() {
        for price in [0.0, 1.0, 99_999_999.0, 100_000_000.0, -5.0, f64::NAN] {
            let product = Product {
                price,
                ..valid_product()
            };
            assert_eq!(
                validate(Some(&product)).get("price").map(String::as_str),
                Some(PRICE_RANGE),
                "{price} should be rejected"
            );
        }

        for price in [1.01, 50.0, 99_999_998.99] {
            let product = Product {
                price,
                ..valid_product()
            };
            assert!(validate(Some(&product)).is_empty(), "{price} should be valid");
        }
    }

    #[test]
    fn test_principal_image_must_be_absolute_url() {
        let product = Product {
            principal_image: "not-a-url".to_string(),
            ..valid_product()
        };
        assert_eq!(validate(Some(&product))["principalImage"], PRINCIPAL_IMAGE_URL);

        let product = Product {
            principal_image: String::new(),
            ..valid_product()
        };
        assert_eq!(validate(Some(&product))["principalImage"], PRINCIPAL_IMAGE_URL);
    }

    #[test]
    fn test_other_images_are_keyed_by_index() {
        let product = Product {
            other_images: vec![
                "https://example.com/1".to_string(),
                "nope".to_string(),
                "https://example.com/3".to_string(),
                "also nope".to_string(),
            ],
            ..valid_product()
        };
        let errors = validate(Some(&product));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["otherImages[1]"], IMAGE_URL);
        assert_eq!(errors["otherImages[3]"], IMAGE_URL);
    }

    #[test]
    fn test_padded_image_urls_are_rejected() {
        let product = Product {
            other_images: vec![
                " https://example.com/y".to_string(),
                "https://example.com/y\n".to_string(),
                "https://exa\u{7}mple.com/y".to_string(),
                "https://example.com/ok".to_string(),
            ],
            ..valid_product()
        };
        let errors = validate(Some(&product));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors["otherImages[0]"], IMAGE_URL);
        assert_eq!(errors["otherImages[1]"], IMAGE_URL);
        assert_eq!(errors["otherImages[2]"], IMAGE_URL);

        let product = Product {
            principal_image: "https://example.com/\u{1}x".to_string(),
            ..valid_product()
        };
        assert_eq!(validate(Some(&product))["principalImage"], PRINCIPAL_IMAGE_URL);
    }

    #[test]
    fn test_sku_suffix_length_counts_characters() {
        let product = Product {
            sku: "FAL-ñññññññ".to_string(),
            ..valid_product()
        };
        assert!(validate(Some(&product)).is_empty());
    }

    #[test]
    fn test_untrimmed_input_validates_like_trimmed() {
        let product = Product {
            sku: " FAL-8406270 ".to_string(),
            name: "  ab  ".to_string(),
            ..valid_product()
        };
        let errors = validate(Some(&product));
        assert!(!errors.contains_key("sku"));
        assert_eq!(errors["name"], NAME_LENGTH);
        assert_eq!(validate(Some(&product.normalized())), errors);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let product = Product {
            sku: "bad".to_string(),
            price: 0.0,
            ..valid_product()
        };
        assert_eq!(validate(Some(&product)), validate(Some(&product)));
    }
}
