use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: i32,
    pub image: String,
    pub created_at: Option<NaiveDateTime>,
}
