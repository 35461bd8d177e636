//! The fixture collections the catalog is built from.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    data::{
        catalog::Catalog,
        category::Category,
        product::Product,
        user::{Sex, User},
    },
    error::CatalogError,
};

/// The three source collections in the shape they are stored in JSON.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Fixtures {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading fixtures");
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::from_parts(self.users, self.categories, self.products)
    }
}

/// The fixture set the application ships with.
pub fn builtin() -> Fixtures {
    Fixtures {
        users: vec![
            User::new(1, "Roma", Sex::Male),
            User::new(2, "Anna", Sex::Female),
            User::new(3, "Max", Sex::Male),
            User::new(4, "John", Sex::Male),
        ],
        categories: vec![
            Category::new(1, "Grocery", "🍞", 2),
            Category::new(2, "Drinks", "🍺", 1),
            Category::new(3, "Fruits", "🍏", 2),
            Category::new(4, "Electronics", "💻", 1),
            Category::new(5, "Clothes", "👚", 3),
        ],
        products: vec![
            Product::new(1, "Milk", 2),
            Product::new(2, "Bread", 1),
            Product::new(3, "Eggs", 1),
            Product::new(4, "Jacket", 5),
            Product::new(5, "Sugar", 1),
            Product::new(6, "Socks", 5),
            Product::new(7, "Cola", 2),
            Product::new(8, "Banana", 3),
            Product::new(9, "Apple", 3),
            Product::new(10, "Laptop", 4),
            Product::new(11, "Headphones", 4),
            Product::new(12, "T-Shirt", 5),
        ],
    }
}

/// Builds the catalog from the fixture set the application ships with.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    builtin().into_catalog()
}

#[cfg(test)]
mod test {
    use crate::data::join::join;

    use super::*;

    #[test]
    fn fixture_builtin_is_referentially_complete() {
        let catalog = builtin_catalog().unwrap();
        let rows = join(&catalog).unwrap();
        assert_eq!(rows.len(), builtin().products.len());
    }

    #[test]
    fn fixture_from_json() {
        let fixtures = Fixtures::from_json(
            r#"{
                "users": [{ "id": 1, "name": "Roma", "sex": "m" }],
                "categories": [{ "id": 7, "title": "Drinks", "icon": "🍺", "ownerId": 1 }],
                "products": [{ "id": 3, "name": "Cola", "categoryId": 7 }]
            }"#,
        )
        .unwrap();

        assert_eq!(fixtures, Fixtures {
            users: vec![User::new(1, "Roma", Sex::Male)],
            categories: vec![Category::new(7, "Drinks", "🍺", 1)],
            products: vec![Product::new(3, "Cola", 7)],
        });
    }

    #[test]
    fn fixture_missing_collections_are_empty() {
        assert_eq!(Fixtures::from_json("{}").unwrap(), Fixtures::default());
    }

    #[test]
    fn fixture_malformed_json() {
        assert!(matches!(Fixtures::from_json(r#"{"users": 3}"#), Err(CatalogError::Fixture(_))));
    }

    #[test]
    fn fixture_missing_file() {
        assert!(matches!(
            Fixtures::from_path("/nonexistent/catalog-fixtures.json"),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn fixture_duplicate_ids_are_rejected() {
        let mut fixtures = builtin();
        fixtures.users.push(User::new(1, "Other Roma", Sex::Male));
        assert!(matches!(fixtures.into_catalog(), Err(CatalogError::DuplicateUser(_))));
    }
}
