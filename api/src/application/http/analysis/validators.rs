use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use skinrelay_core::domain::skincare_analysis::{
    entities::Product, services::PRODUCTS_REQUIRED,
};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductPayload {
    #[serde(default)]
    #[schema(example = "Retinol Serum")]
    pub name: String,

    #[serde(default, rename = "type")]
    #[schema(example = "serum")]
    pub product_type: String,
}

impl ProductPayload {
    /// Reads one entry of the products array; a bare string is taken as the name.
    fn from_value(value: &Value) -> Self {
        let text = |field: &str| {
            value
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        match value {
            Value::String(name) => Self {
                name: name.clone(),
                product_type: String::new(),
            },
            _ => Self {
                name: text("name"),
                product_type: text("type"),
            },
        }
    }
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        Product::new(payload.name, payload.product_type)
    }
}

/// `products` is kept as raw JSON so that `null` or a non-array value is
/// reported with the same message as a missing field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeProductsRequest {
    #[serde(default)]
    #[validate(
        required(message = "Products array is required."),
        custom(function = "validate_products")
    )]
    #[schema(value_type = Vec<ProductPayload>)]
    pub products: Option<Value>,
}

impl AnalyzeProductsRequest {
    pub fn into_products(self) -> Vec<Product> {
        match self.products {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(ProductPayload::from_value)
                .map(Product::from)
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn validate_products(products: &Value) -> Result<(), ValidationError> {
    match products {
        Value::Array(entries) if !entries.is_empty() => Ok(()),
        _ => Err(ValidationError::new("products").with_message(Cow::Borrowed(PRODUCTS_REQUIRED))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(body: Value) -> AnalyzeProductsRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_non_array_products_fail_validation() {
        for body in [
            json!({}),
            json!({ "products": null }),
            json!({ "products": "Retinol" }),
            json!({ "products": {} }),
            json!({ "products": [] }),
        ] {
            assert!(request(body).validate().is_err());
        }
    }

    #[test]
    fn test_entries_become_products_in_order() {
        let products = request(json!({
            "products": [
                { "name": "Retinol", "type": "serum" },
                "Sunscreen",
                { "name": 3 }
            ]
        }))
        .into_products();

        assert_eq!(
            products,
            vec![
                Product::new("Retinol", "serum"),
                Product::new("Sunscreen", ""),
                Product::new("", ""),
            ]
        );
    }
}
