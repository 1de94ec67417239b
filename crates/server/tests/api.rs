use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use server::handler::AppRouter;
use shared::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductCommandRepository,
        DynProductQueryRepository, OrderCommandRepositoryTrait, OrderQueryRepositoryTrait,
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    di::DependenciesInject,
    domain::requests::{CreateProductRequest, CustomerInfo},
    errors::RepositoryError,
    model::{Customer, Order, OrderItem, Product},
    service::{OrderService, OrderServiceDeps, ProductService},
    state::AppState,
};
use sqlx::types::Json;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

#[derive(Default)]
struct StoreInner {
    products: Vec<Product>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
    next_product_id: i32,
}

/// In-memory stand-in for the Postgres store, wired through the same
/// repository traits the real router uses.
#[derive(Default)]
struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStore {
    fn add_product(&self, name: &str, price: f64, stock: i32) -> i32 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_product_id += 1;
        let id = inner.next_product_id;
        inner.products.push(Product {
            product_id: id,
            name: name.to_string(),
            price,
            description: None,
            stock,
            image: "/images/placeholder.svg".to_string(),
            created_at: None,
        });
        id
    }

    fn stock_of(&self, product_id: i32) -> i32 {
        self.inner
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .map(|p| p.stock)
            .unwrap()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        // Insertion order stands in for created_at; newest first.
        let inner = self.inner.lock().unwrap();
        Ok(inner.products.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryStore {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_product_id += 1;
        let product = Product {
            product_id: inner.next_product_id,
            name: req.name.clone(),
            price: req.price,
            description: req.description.clone(),
            stock: req.stock,
            image: req.image.clone(),
            created_at: None,
        };
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.products.len();
        inner.products.retain(|p| p.product_id != product_id);
        if inner.products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.orders.iter().rev().cloned().collect())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryStore {
    async fn place_order(
        &self,
        customer_info: &CustomerInfo,
        total: f64,
        items: &[OrderItem],
    ) -> Result<Order, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();

        for item in items {
            let product = inner
                .products
                .iter()
                .find(|p| p.product_id == item.product_id)
                .ok_or(RepositoryError::NotFound)?;
            if product.stock < item.quantity {
                return Err(RepositoryError::InsufficientStock(item.product_name.clone()));
            }
        }

        for item in items {
            if let Some(product) = inner
                .products
                .iter_mut()
                .find(|p| p.product_id == item.product_id)
            {
                product.stock -= item.quantity;
            }
        }

        let customer = Customer {
            customer_id: inner.customers.len() as i32 + 1,
            name: customer_info.name.clone(),
            email: customer_info.email.clone(),
            address: customer_info.address.clone(),
            created_at: None,
        };
        inner.customers.push(customer.clone());

        let order = Order {
            order_id: inner.orders.len() as i32 + 1,
            customer_id: customer.customer_id,
            customer_name: customer.name,
            customer_email: customer.email,
            total,
            status: "pending".to_string(),
            items: Json(items.to_vec()),
            created_at: None,
        };
        inner.orders.push(order.clone());

        Ok(order)
    }
}

fn test_app(store: Arc<InMemoryStore>) -> Router {
    let product_service = ProductService::new(
        store.clone() as DynProductQueryRepository,
        store.clone() as DynProductCommandRepository,
    );

    let order_service = OrderService::new(OrderServiceDeps {
        query: store.clone() as DynOrderQueryRepository,
        command: store.clone() as DynOrderCommandRepository,
        product_query: store as DynProductQueryRepository,
    });

    AppRouter::build(AppState {
        di_container: DependenciesInject {
            product_service,
            order_service,
        },
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn order_payload(items: Value) -> Value {
    json!({
        "items": items,
        "customerInfo": {
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "address": "1 Main St"
        }
    })
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = test_app(Arc::new(InMemoryStore::default()));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn products_are_listed_newest_first() {
    let store = Arc::new(InMemoryStore::default());
    store.add_product("Buckets", 29.99, 50);
    store.add_product("Load Balancers", 34.99, 30);
    let app = test_app(store);

    let response = app
        .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "Load Balancers");
    assert_eq!(body[1]["name"], "Buckets");
}

#[tokio::test]
async fn creating_a_product_applies_defaults() {
    let app = test_app(Arc::new(InMemoryStore::default()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({ "name": "Buckets", "price": 29.99 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["stock"], 0);
    assert_eq!(body["image"], "/images/placeholder.svg");
}

#[tokio::test]
async fn creating_a_product_without_a_name_fails() {
    let app = test_app(Arc::new(InMemoryStore::default()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({ "price": 29.99 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn deleting_an_unknown_product_returns_404() {
    let app = test_app(Arc::new(InMemoryStore::default()));

    let response = app
        .oneshot(
            Request::delete("/api/products/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Product not found");
}

#[tokio::test]
async fn placing_an_order_returns_the_created_order() {
    let store = Arc::new(InMemoryStore::default());
    let id = store.add_product("Buckets", 10.0, 5);
    let app = test_app(store.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/orders",
            order_payload(json!([{ "productId": id, "quantity": 2 }])),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["total"], 20.0);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["items"][0]["productName"], "Buckets");
    assert_eq!(body["items"][0]["subtotal"], 20.0);
    assert_eq!(store.stock_of(id), 3);
}

#[tokio::test]
async fn ordering_more_than_stock_returns_400() {
    let store = Arc::new(InMemoryStore::default());
    let id = store.add_product("Load Balancers", 20.0, 0);
    let app = test_app(store.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/orders",
            order_payload(json!([{ "productId": id, "quantity": 1 }])),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Insufficient stock for Load Balancers"
    );
    assert_eq!(store.stock_of(id), 0);
}

#[tokio::test]
async fn ordering_an_unknown_product_returns_404() {
    let app = test_app(Arc::new(InMemoryStore::default()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/orders",
            order_payload(json!([{ "productId": 999, "quantity": 1 }])),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Product 999 not found");
}

#[tokio::test]
async fn ordering_with_no_items_returns_400() {
    let app = test_app(Arc::new(InMemoryStore::default()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/orders",
            order_payload(json!([])),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn orders_are_listed_newest_first() {
    let store = Arc::new(InMemoryStore::default());
    let first = store.add_product("Buckets", 10.0, 5);
    let second = store.add_product("Load Balancers", 20.0, 5);
    let app = test_app(store);

    for id in [first, second] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                order_payload(json!([{ "productId": id, "quantity": 1 }])),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::get("/api/orders").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["items"][0]["productName"], "Load Balancers");
    assert_eq!(body[1]["items"][0]["productName"], "Buckets");
}

#[tokio::test]
async fn order_snapshots_survive_product_deletion() {
    let store = Arc::new(InMemoryStore::default());
    let id = store.add_product("Buckets", 10.0, 5);
    let app = test_app(store);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orders",
            order_payload(json!([{ "productId": id, "quantity": 1 }])),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/api/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/api/orders").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["items"][0]["productName"], "Buckets");
    assert_eq!(body[0]["items"][0]["price"], 10.0);
}
