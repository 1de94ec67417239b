use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{requests::CreateProductRequest, responses::ProductResponse},
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        req.validate()
            .map_err(|err| ServiceError::Validation(vec![err.to_string()]))?;

        info!("🏗️ Creating product: {}", req.name);

        let product = self.command.create_product(req).await?;

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), ServiceError> {
        match self.command.delete_product(product_id).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => {
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
