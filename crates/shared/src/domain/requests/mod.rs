mod order;
mod product;

pub use self::order::{CreateOrderRequest, CustomerInfo, OrderItemRequest};
pub use self::product::{CreateProductRequest, PLACEHOLDER_IMAGE};
