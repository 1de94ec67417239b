use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CustomerInfo,
    errors::RepositoryError,
    model::{Customer as CustomerModel, Order as OrderModel, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use sqlx::types::Json;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn place_order(
        &self,
        customer_info: &CustomerInfo,
        total: f64,
        items: &[OrderItem],
    ) -> Result<OrderModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Every checkout creates a fresh customer row; repeat emails are
        // not reconciled against earlier customers.
        let customer = sqlx::query_as::<_, CustomerModel>(
            r#"
            INSERT INTO customers (name, email, address)
            VALUES ($1, $2, $3)
            RETURNING customer_id, name, email, address, created_at
            "#,
        )
        .bind(&customer_info.name)
        .bind(&customer_info.email)
        .bind(&customer_info.address)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create customer record: {:?}", err);
            RepositoryError::from(err)
        })?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (customer_id, customer_name, customer_email, total, status, items)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING order_id, customer_id, customer_name, customer_email,
                      total, status, items, created_at
            "#,
        )
        .bind(customer.customer_id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(total)
        .bind(OrderStatus::Pending.as_str())
        .bind(Json(items))
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order: {:?}", err);
            RepositoryError::from(err)
        })?;

        // Conditional decrement per line item. Matching zero rows means the
        // stock ran out after validation; dropping the transaction rolls
        // back the customer, the order, and any decrements already applied.
        for item in items {
            let updated = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - $1
                WHERE product_id = $2 AND stock >= $1
                "#,
            )
            .bind(item.quantity)
            .bind(item.product_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to decrease stock for product {}: {:?}",
                    item.product_id, err
                );
                RepositoryError::from(err)
            })?;

            if updated.rows_affected() == 0 {
                error!(
                    "❌ Stock for product {} ran out before commit",
                    item.product_id
                );
                return Err(RepositoryError::InsufficientStock(item.product_name.clone()));
            }
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} for customer ID {} (total: {})",
            order.order_id, order.customer_id, order.total
        );
        Ok(order)
    }
}
