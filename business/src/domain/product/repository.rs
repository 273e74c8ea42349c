use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::Category;

/// Data-access port for the product catalog.
///
/// `insert` and `update` return the product they were given once exactly one
/// row was written; zero written rows is an error. Lookups that match nothing
/// return `None` rather than an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_name(&self, product_name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
