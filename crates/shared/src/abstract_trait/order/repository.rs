use crate::{
    domain::requests::CustomerInfo,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// All orders, most recently created first.
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Commits a validated order in one unit: a fresh customer row, the
    /// order row with its line-item snapshots, and a conditional stock
    /// decrement per item. A decrement that matches no row (stock ran out
    /// between validation and commit) rolls everything back and returns
    /// `RepositoryError::InsufficientStock`.
    async fn place_order(
        &self,
        customer_info: &CustomerInfo,
        total: f64,
        items: &[OrderItem],
    ) -> Result<OrderModel, RepositoryError>;
}
