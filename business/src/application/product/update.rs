use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.product_id));

        let mut product = self
            .repository
            .find_by_id(params.product_id)
            .await?
            .ok_or(ProductError::NotFound)?;

        product.change_name(params.product_name);
        product.change_category(params.category);
        product.change_price(params.price);
        product.change_description(params.description);

        let product = self.repository.update(&product).await?;

        self.logger
            .info(&format!("Product updated: {}", product.product_id));
        Ok(product)
    }
}
