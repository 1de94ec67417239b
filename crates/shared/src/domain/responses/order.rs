use crate::model::{Order, OrderItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub total: f64,
    pub status: String,
    pub items: Vec<OrderItem>,
    pub created_at: Option<String>,
}

// model to response
impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            customer_id: value.customer_id,
            customer_name: value.customer_name,
            customer_email: value.customer_email,
            total: value.total,
            status: value.status,
            items: value.items.0,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
