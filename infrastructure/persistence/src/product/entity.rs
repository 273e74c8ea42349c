use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::Category;

/// Row of the `products` table. `product_id` is the 16-byte binary form of
/// the product's UUID.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub product_id: Vec<u8>,
    pub product_name: String,
    pub category: String,
    pub price: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let product_id = bin_to_uuid(&self.product_id)?;
        let category = self.category.parse::<Category>().map_err(|_| {
            RepositoryError::corrupt_row(format!("unknown category '{}'", self.category))
        })?;

        Ok(Product::from_repository(
            product_id,
            self.product_name,
            category,
            self.price,
            self.description,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub fn uuid_to_bin(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

pub fn bin_to_uuid(bytes: &[u8]) -> Result<Uuid, RepositoryError> {
    Uuid::from_slice(bytes).map_err(|_| {
        RepositoryError::corrupt_row(format!(
            "product_id has {} bytes, expected 16",
            bytes.len()
        ))
    })
}
