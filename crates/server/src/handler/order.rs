use crate::middleware::SimpleValidatedJson;
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::{requests::CreateOrderRequest, responses::OrderResponse},
    errors::HttpError,
    service::OrderService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders, newest first", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<OrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Created order", body = OrderResponse),
        (status = 400, description = "Missing items/customer info or insufficient stock"),
        (status = 404, description = "Unknown product"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order(
    Extension(service): Extension<OrderService>,
    SimpleValidatedJson(req): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.command.create_order(&req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders", post(create_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
