use askama::Template;
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use shared::{
    domain::responses::{OrderResponse, ProductResponse},
    service::{OrderService, ProductService},
    state::AppState,
};
use std::sync::Arc;
use tracing::error;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    products: Vec<ProductResponse>,
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    products: Vec<ProductResponse>,
    orders: Vec<OrderResponse>,
}

#[derive(Template)]
#[template(path = "cart.html")]
struct CartTemplate;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: String,
}

fn render_page<T: Template>(template: T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("❌ Failed to render template: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Something went wrong!".to_string()),
            )
                .into_response()
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> Response {
    render_page(
        ErrorTemplate {
            message: message.to_string(),
        },
        status,
    )
}

pub async fn home(Extension(products): Extension<ProductService>) -> Response {
    match products.query.find_all().await {
        Ok(products) => render_page(IndexTemplate { products }, StatusCode::OK),
        Err(err) => {
            error!("❌ Error fetching products: {:?}", err);
            error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load products",
            )
        }
    }
}

pub async fn admin(
    Extension(products): Extension<ProductService>,
    Extension(orders): Extension<OrderService>,
) -> Response {
    let products = products.query.find_all().await;
    let orders = orders.query.find_all().await;

    match (products, orders) {
        (Ok(products), Ok(orders)) => {
            render_page(AdminTemplate { products, orders }, StatusCode::OK)
        }
        (products, orders) => {
            error!(
                "❌ Error loading admin data: products={:?} orders={:?}",
                products.is_err(),
                orders.is_err()
            );
            error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load admin data",
            )
        }
    }
}

pub async fn cart() -> Response {
    render_page(CartTemplate, StatusCode::OK)
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn page_not_found() -> Response {
    error_page(StatusCode::NOT_FOUND, "Page not found")
}

pub fn page_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", get(home))
        .route("/admin", get(admin))
        .route("/cart", get(cart))
        .route("/health", get(health))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
