use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::Category;

/// A sellable coffee item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: Uuid,
    pub product_name: String,
    pub category: Category,
    pub price: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub product_name: String,
    pub category: Category,
    pub price: i64,
    pub description: Option<String>,
}

/// Current time at the precision PostgreSQL keeps for `TIMESTAMPTZ`.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        let now = now();
        Self {
            product_id: Uuid::new_v4(),
            product_name: props.product_name,
            category: props.category,
            price: props.price,
            description: props.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        product_id: Uuid,
        product_name: String,
        category: Category,
        price: i64,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            product_name,
            category,
            price,
            description,
            created_at,
            updated_at,
        }
    }

    pub fn change_name(&mut self, product_name: impl Into<String>) {
        self.product_name = product_name.into();
        self.touch();
    }

    pub fn change_category(&mut self, category: Category) {
        self.category = category;
        self.touch();
    }

    pub fn change_price(&mut self, price: i64) {
        self.price = price;
        self.touch();
    }

    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn new_product() -> Product {
        Product::new(NewProductProps {
            product_name: "new-product".to_string(),
            category: Category::CoffeeBeanPackage,
            price: 1000,
            description: None,
        })
    }

    #[test]
    fn should_create_product_with_equal_timestamps() {
        let product = new_product();

        assert_eq!(product.product_name, "new-product");
        assert_eq!(product.price, 1000);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_assign_distinct_ids_to_new_products() {
        assert_ne!(new_product().product_id, new_product().product_id);
    }

    #[test]
    fn should_keep_timestamps_at_microsecond_precision() {
        let product = new_product();
        assert_eq!(product.created_at.nanosecond() % 1_000, 0);
    }

    #[test]
    fn should_bump_updated_at_when_name_changes() {
        let mut product = new_product();
        let created_at = product.created_at;

        product.change_name("updated-product");

        assert_eq!(product.product_name, "updated-product");
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at >= created_at);
    }

    #[test]
    fn should_replace_price_and_description() {
        let mut product = new_product();

        product.change_price(2500);
        product.change_description(Some("Ethiopia single origin".to_string()));

        assert_eq!(product.price, 2500);
        assert_eq!(
            product.description.as_deref(),
            Some("Ethiopia single origin")
        );
    }
}
