use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Category;

/// Full replacement of the mutable fields of an existing product.
pub struct UpdateProductParams {
    pub product_id: Uuid,
    pub product_name: String,
    pub category: Category,
    pub price: i64,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
