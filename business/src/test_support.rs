use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::Category;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn insert(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, RepositoryError>;
        async fn find_by_name(&self, product_name: &str) -> Result<Option<Product>, RepositoryError>;
        async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
        async fn delete_all(&self) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// A persisted product with fixed timestamps in the past.
pub fn stored_product(product_id: Uuid, product_name: &str) -> Product {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    Product::from_repository(
        product_id,
        product_name.to_string(),
        Category::CoffeeBeanPackage,
        1000,
        None,
        created_at,
        created_at,
    )
}
