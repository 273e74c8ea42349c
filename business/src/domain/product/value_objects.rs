use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Catalog category of a product.
///
/// Stored in the `category` column and serialized using the upper-snake
/// name (e.g. `COFFEE_BEAN_PACKAGE`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    CoffeeBeanPackage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_category_as_upper_snake_name() {
        assert_eq!(Category::CoffeeBeanPackage.to_string(), "COFFEE_BEAN_PACKAGE");
    }

    #[test]
    fn should_parse_category_from_stored_name() {
        let category = "COFFEE_BEAN_PACKAGE".parse::<Category>();
        assert_eq!(category, Ok(Category::CoffeeBeanPackage));
    }

    #[test]
    fn should_reject_unknown_category_name() {
        assert!("coffee_bean_package".parse::<Category>().is_err());
        assert!("TEA_BAG".parse::<Category>().is_err());
    }

    #[test]
    fn should_serialize_category_with_stored_name() {
        let json = serde_json::to_string(&Category::CoffeeBeanPackage).unwrap();
        assert_eq!(json, "\"COFFEE_BEAN_PACKAGE\"");
    }
}
