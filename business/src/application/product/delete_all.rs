use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete_all::DeleteAllProductsUseCase;

pub struct DeleteAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteAllProductsUseCase for DeleteAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<(), ProductError> {
        self.logger.warn("Deleting all products");
        self.repository.delete_all().await?;
        Ok(())
    }
}
