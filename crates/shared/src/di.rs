use crate::{
    config::ConnectionPool,
    repository::{OrderRepository, ProductRepository},
    service::{OrderService, OrderServiceDeps, ProductService},
};
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: ProductService,
    pub order_service: OrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_repository = ProductRepository::new(pool.clone());
        let order_repository = OrderRepository::new(pool.clone());

        let product_service = ProductService::new(
            product_repository.query.clone(),
            product_repository.command,
        );

        let order_service = OrderService::new(OrderServiceDeps {
            query: order_repository.query,
            command: order_repository.command,
            product_query: product_repository.query,
        });

        Self {
            product_service,
            order_service,
        }
    }
}
