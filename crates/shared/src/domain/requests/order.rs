use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Items are required"), nested)]
    pub items: Vec<OrderItemRequest>,

    #[validate(nested)]
    pub customer_info: CustomerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CustomerInfo {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Customer email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Customer address is required"))]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            address: "1 Main St".into(),
        }
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{
                "items": [{"productId": 3, "quantity": 2}],
                "customerInfo": {"name": "Ada", "email": "ada@example.com", "address": "1 Main St"}
            }"#,
        )
        .unwrap();

        assert_eq!(req.items[0].product_id, 3);
        assert_eq!(req.items[0].quantity, 2);
        assert_eq!(req.customer_info.email, "ada@example.com");
    }

    #[test]
    fn empty_items_fail_validation() {
        let req = CreateOrderRequest {
            items: vec![],
            customer_info: customer(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_quantity_fails_validation() {
        let req = CreateOrderRequest {
            items: vec![OrderItemRequest {
                product_id: 1,
                quantity: 0,
            }],
            customer_info: customer(),
        };

        assert!(req.validate().is_err());
    }
}
