use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_name::{
    GetProductByNameParams, GetProductByNameUseCase,
};

pub struct GetProductByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByNameUseCase for GetProductByNameUseCaseImpl {
    async fn execute(&self, params: GetProductByNameParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by name: {}", params.product_name));

        self.repository
            .find_by_name(&params.product_name)
            .await?
            .ok_or(ProductError::NotFound)
    }
}
