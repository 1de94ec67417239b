use anyhow::Result;
use shared::{
    domain::requests::{CreateProductRequest, PLACEHOLDER_IMAGE},
    state::AppState,
};
use tracing::info;

/// Seeds the three sample products when the catalog is empty, mirroring
/// what a fresh demo deployment expects to see.
pub async fn seed_products(state: &AppState) -> Result<()> {
    let product_service = &state.di_container.product_service;

    if !product_service.query.find_all().await?.is_empty() {
        return Ok(());
    }

    info!("Seeding sample products...");

    let samples = [
        CreateProductRequest {
            name: "Buckets".to_string(),
            price: 29.99,
            description: Some("Amazon S3 Buckets for scalable storage".to_string()),
            stock: 50,
            image: PLACEHOLDER_IMAGE.to_string(),
        },
        CreateProductRequest {
            name: "Load Balancers".to_string(),
            price: 34.99,
            description: Some("Customizable load balancers for your applications".to_string()),
            stock: 30,
            image: PLACEHOLDER_IMAGE.to_string(),
        },
        CreateProductRequest {
            name: "Microsoft Azure".to_string(),
            price: 24.99,
            description: Some(
                "Cloud computing services for building, testing, and deploying applications"
                    .to_string(),
            ),
            stock: 25,
            image: PLACEHOLDER_IMAGE.to_string(),
        },
    ];

    for sample in &samples {
        product_service.command.create_product(sample).await?;
    }

    info!("Sample products created.");
    Ok(())
}
