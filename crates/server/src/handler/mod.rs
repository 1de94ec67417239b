mod order;
mod pages;
mod product;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use shared::state::AppState;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::order::order_routes;
pub use self::pages::page_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::create_product,
        product::delete_product,

        order::get_orders,
        order::create_order,
    ),
    components(schemas(
        shared::domain::requests::CreateProductRequest,
        shared::domain::requests::CreateOrderRequest,
        shared::domain::responses::ProductResponse,
        shared::domain::responses::OrderResponse,
        shared::model::OrderItem,
        shared::domain::responses::MessageResponse,
        shared::errors::ErrorResponse,
    )),
    tags(
        (name = "Product", description = "Catalog management"),
        (name = "Order", description = "Order placement and history")
    )
)]
pub struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let (api_router, api) = api_router.split_for_parts();

        Router::new()
            .merge(api_router)
            .merge(page_routes(shared_state.clone()))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .nest_service("/js", ServeDir::new("public/js"))
            .nest_service("/css", ServeDir::new("public/css"))
            .nest_service("/images", ServeDir::new("public/images"))
            .fallback(pages::page_not_found)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
