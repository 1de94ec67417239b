use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub created_at: Option<NaiveDateTime>,
}
