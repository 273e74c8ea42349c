use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::Category;

use super::entity::{ProductEntity, uuid_to_bin};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        error!(operation, error = %err, "products query failed");
        RepositoryError::DatabaseError
    }
}

/// Writes additionally report a clash on the unique product name.
fn write_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        if matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation()) {
            debug!(operation, error = %err, "unique constraint violated");
            return RepositoryError::Duplicated;
        }
        database_error(operation)(err)
    }
}

fn into_products(entities: Vec<ProductEntity>) -> Result<Vec<Product>, RepositoryError> {
    entities.into_iter().map(ProductEntity::into_domain).collect()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT product_id, product_name, category, price, description, created_at, updated_at FROM products ORDER BY created_at, product_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("find_all"))?;

        into_products(entities)
    }

    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO products (product_id, product_name, category, price, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(uuid_to_bin(product.product_id))
        .bind(&product.product_name)
        .bind(product.category.to_string())
        .bind(product.price)
        .bind(&product.description)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(write_error("insert"))?;

        if result.rows_affected() != 1 {
            return Err(RepositoryError::NothingInserted);
        }
        Ok(product.clone())
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                product_name = $2,
                category = $3,
                price = $4,
                description = $5,
                updated_at = $6
            WHERE product_id = $1"#,
        )
        .bind(uuid_to_bin(product.product_id))
        .bind(&product.product_name)
        .bind(product.category.to_string())
        .bind(product.price)
        .bind(&product.description)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(write_error("update"))?;

        if result.rows_affected() != 1 {
            return Err(RepositoryError::NothingUpdated);
        }
        Ok(product.clone())
    }

    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, RepositoryError> {
        sqlx::query_as::<_, ProductEntity>(
            "SELECT product_id, product_name, category, price, description, created_at, updated_at FROM products WHERE product_id = $1",
        )
        .bind(uuid_to_bin(product_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("find_by_id"))?
        .map(ProductEntity::into_domain)
        .transpose()
    }

    async fn find_by_name(&self, product_name: &str) -> Result<Option<Product>, RepositoryError> {
        sqlx::query_as::<_, ProductEntity>(
            "SELECT product_id, product_name, category, price, description, created_at, updated_at FROM products WHERE product_name = $1",
        )
        .bind(product_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("find_by_name"))?
        .map(ProductEntity::into_domain)
        .transpose()
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT product_id, product_name, category, price, description, created_at, updated_at FROM products WHERE category = $1 ORDER BY created_at, product_name",
        )
        .bind(category.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("find_by_category"))?;

        into_products(entities)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(database_error("delete_all"))?;

        debug!(deleted = result.rows_affected(), "products deleted");
        Ok(())
    }
}
