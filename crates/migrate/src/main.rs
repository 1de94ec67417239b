mod config;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use config::SourceConfig;
use dotenv::dotenv;
use shared::{config::ConnectionManager, model::OrderItem, utils::init_logger};
use sqlx::{
    FromRow, MySqlPool,
    mysql::MySqlPoolOptions,
    types::Json,
};
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, FromRow)]
struct SourceProduct {
    name: String,
    price: f64,
    description: Option<String>,
    stock: i32,
    image: Option<String>,
}

#[derive(Debug, FromRow)]
struct SourceCustomer {
    id: i32,
    name: String,
    email: String,
    address: String,
}

#[derive(Debug, FromRow)]
struct SourceOrder {
    id: i32,
    customer_id: i32,
    total: f64,
    status: Option<String>,
    created_at: Option<NaiveDateTime>,
}

#[derive(Debug, FromRow)]
struct SourceOrderItem {
    order_id: i32,
    product_id: i32,
    product_name: String,
    price: f64,
    quantity: i32,
    subtotal: f64,
}

/// Groups flat order_items rows by their owning order id, already shaped
/// as the embedded snapshots the target store expects.
fn group_items(rows: Vec<SourceOrderItem>) -> HashMap<i32, Vec<OrderItem>> {
    let mut grouped: HashMap<i32, Vec<OrderItem>> = HashMap::new();

    for row in rows {
        grouped.entry(row.order_id).or_default().push(OrderItem {
            product_id: row.product_id,
            product_name: row.product_name,
            price: row.price,
            quantity: row.quantity,
            subtotal: row.subtotal,
        });
    }

    grouped
}

async fn migrate_products(
    mysql: &MySqlPool,
    pg: &shared::config::ConnectionPool,
) -> Result<usize> {
    info!("📦 Migrating products...");

    let rows = sqlx::query_as::<_, SourceProduct>(
        r#"
        SELECT name, CAST(price AS DOUBLE) AS price, description, stock, image
        FROM products
        "#,
    )
    .fetch_all(mysql)
    .await
    .context("Failed to read source products")?;

    for product in &rows {
        sqlx::query(
            r#"
            INSERT INTO products (name, price, description, stock, image)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.stock)
        .bind(
            product
                .image
                .as_deref()
                .unwrap_or(shared::domain::requests::PLACEHOLDER_IMAGE),
        )
        .execute(pg)
        .await
        .context("Failed to insert product")?;
    }

    info!("   ✔ Migrated {} products", rows.len());
    Ok(rows.len())
}

/// Copies customers and returns the source-id → target-id map used to
/// relink orders.
async fn migrate_customers(
    mysql: &MySqlPool,
    pg: &shared::config::ConnectionPool,
) -> Result<(HashMap<i32, i32>, HashMap<i32, (String, String)>)> {
    info!("👤 Migrating customers...");

    let rows = sqlx::query_as::<_, SourceCustomer>(
        r#"
        SELECT id, name, email, address
        FROM customers
        "#,
    )
    .fetch_all(mysql)
    .await
    .context("Failed to read source customers")?;

    let mut id_map = HashMap::new();
    let mut contact_map = HashMap::new();

    for customer in &rows {
        let (new_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO customers (name, email, address)
            VALUES ($1, $2, $3)
            RETURNING customer_id
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.address)
        .fetch_one(pg)
        .await
        .context("Failed to insert customer")?;

        id_map.insert(customer.id, new_id);
        contact_map.insert(customer.id, (customer.name.clone(), customer.email.clone()));
    }

    info!("   ✔ Migrated {} customers", rows.len());
    Ok((id_map, contact_map))
}

async fn migrate_orders(
    mysql: &MySqlPool,
    pg: &shared::config::ConnectionPool,
    customer_ids: &HashMap<i32, i32>,
    customer_contacts: &HashMap<i32, (String, String)>,
) -> Result<usize> {
    info!("🧾 Migrating orders...");

    let orders = sqlx::query_as::<_, SourceOrder>(
        r#"
        SELECT id, customer_id, CAST(total AS DOUBLE) AS total, status, created_at
        FROM orders
        "#,
    )
    .fetch_all(mysql)
    .await
    .context("Failed to read source orders")?;

    let items = sqlx::query_as::<_, SourceOrderItem>(
        r#"
        SELECT order_id, product_id, product_name,
               CAST(price AS DOUBLE) AS price, quantity,
               CAST(subtotal AS DOUBLE) AS subtotal
        FROM order_items
        "#,
    )
    .fetch_all(mysql)
    .await
    .context("Failed to read source order items")?;

    let mut grouped = group_items(items);

    for order in &orders {
        let Some(&new_customer_id) = customer_ids.get(&order.customer_id) else {
            warn!(
                "⚠️ Order {} references unknown customer {}; skipping",
                order.id, order.customer_id
            );
            continue;
        };

        let (name, email) = customer_contacts
            .get(&order.customer_id)
            .cloned()
            .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

        let order_items = grouped.remove(&order.id).unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO orders (customer_id, customer_name, customer_email,
                                total, status, items, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, current_timestamp))
            "#,
        )
        .bind(new_customer_id)
        .bind(&name)
        .bind(&email)
        .bind(order.total)
        .bind(order.status.as_deref().unwrap_or("pending"))
        .bind(Json(&order_items))
        .bind(order.created_at)
        .execute(pg)
        .await
        .context("Failed to insert order")?;
    }

    info!("   ✔ Migrated {} orders", orders.len());
    Ok(orders.len())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("migrate");

    info!("🚀 Starting SQL → document-store migration...");

    let source_config = SourceConfig::init().context("Failed to load source configuration")?;
    let database_url =
        std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

    let mysql = MySqlPoolOptions::new()
        .max_connections(2)
        .connect(&source_config.connection_string())
        .await
        .context("Failed to connect to MySQL source")?;
    info!("🟢 Connected to MySQL");

    // Sequential batch copy; two connections per side is plenty.
    let pg = ConnectionManager::new_pool(&database_url, 2)
        .await
        .context("Failed to connect to target store")?;
    info!("🟢 Connected to Postgres");

    sqlx::migrate!("../../migrations")
        .run(&pg)
        .await
        .context("Failed to prepare target schema")?;

    // Clean slate: this job is a run-once copy, not an incremental sync.
    sqlx::query("TRUNCATE products, customers, orders RESTART IDENTITY")
        .execute(&pg)
        .await
        .context("Failed to truncate target tables")?;

    migrate_products(&mysql, &pg).await?;
    let (customer_ids, customer_contacts) = migrate_customers(&mysql, &pg).await?;
    migrate_orders(&mysql, &pg, &customer_ids, &customer_contacts).await?;

    info!("🎉 Migration completed successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(order_id: i32, product_id: i32, name: &str) -> SourceOrderItem {
        SourceOrderItem {
            order_id,
            product_id,
            product_name: name.to_string(),
            price: 10.0,
            quantity: 1,
            subtotal: 10.0,
        }
    }

    #[test]
    fn items_are_grouped_by_order() {
        let grouped = group_items(vec![
            item(1, 10, "Buckets"),
            item(2, 11, "Load Balancers"),
            item(1, 12, "Microsoft Azure"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&1].len(), 2);
        assert_eq!(grouped[&2].len(), 1);
        assert_eq!(grouped[&1][0].product_name, "Buckets");
        assert_eq!(grouped[&1][1].product_name, "Microsoft Azure");
    }

    #[test]
    fn orders_without_items_get_an_empty_snapshot_list() {
        let grouped = group_items(vec![]);
        assert!(grouped.get(&42).is_none());
    }
}
