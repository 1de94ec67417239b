use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynProductQueryRepository, OrderCommandServiceTrait,
    },
    domain::{requests::CreateOrderRequest, responses::OrderResponse},
    errors::ServiceError,
    model::OrderItem,
};
use async_trait::async_trait;
use tracing::info;

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    product_query: DynProductQueryRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, product_query: DynProductQueryRepository) -> Self {
        Self {
            command,
            product_query,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    /// The order-placement workflow: verify every requested product exists
    /// and has enough stock, snapshot name/price into line items, then hand
    /// the whole commit (customer row, order row, stock decrements) to the
    /// repository as one unit. The first failing item aborts the operation
    /// with nothing persisted.
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        if req.items.is_empty() {
            return Err(ServiceError::Validation(vec![
                "Items and customer info are required".to_string(),
            ]));
        }

        info!(
            "🏗️ Placing order with {} line item(s) for {}",
            req.items.len(),
            req.customer_info.email
        );

        let mut total = 0.0;
        let mut items = Vec::with_capacity(req.items.len());

        for item in &req.items {
            let product = self
                .product_query
                .find_by_id(item.product_id)
                .await?
                .ok_or_else(|| {
                    ServiceError::NotFound(format!("Product {} not found", item.product_id))
                })?;

            if product.stock < item.quantity {
                return Err(ServiceError::InsufficientStock(product.name));
            }

            let subtotal = product.price * f64::from(item.quantity);
            total += subtotal;

            items.push(OrderItem {
                product_id: product.product_id,
                product_name: product.name,
                price: product.price,
                quantity: item.quantity,
                subtotal,
            });
        }

        // Commit-time insufficiency (a concurrent order won the stock)
        // surfaces as the same InsufficientStock error as the pre-check.
        let order = self
            .command
            .place_order(&req.customer_info, total, &items)
            .await?;

        Ok(OrderResponse::from(order))
    }
}
