use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Buckets")]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(example = 29.99)]
    pub price: f64,

    pub description: Option<String>,

    // Omitted stock falls back to an empty shelf, omitted image to the
    // placeholder asset.
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    #[schema(example = 50)]
    pub stock: i32,

    #[serde(default = "default_image")]
    pub image: String,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}
