use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;

use super::{
    category::{Category, CategoryId},
    product::{Product, ProductId},
    user::{User, UserId},
};

/// The source collections of the catalog. Built once at startup and then
/// only read from; the join and the front ends take it by reference.
///
/// Every collection keeps the order in which its records were added. IDs must
/// be unique within a collection, but references between collections are not
/// checked until the catalog is joined.
#[derive(Debug, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
    /// Position of each user in `users`.
    user_index: HashMap<UserId, usize>,
    /// Position of each category in `categories`.
    category_index: HashMap<CategoryId, usize>,
    product_ids: HashSet<ProductId>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog from whole collections, failing on the first duplicate
    /// ID.
    pub fn from_parts(
        users: impl IntoIterator<Item = User>,
        categories: impl IntoIterator<Item = Category>,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        for user in users {
            catalog.add_user(user)?;
        }
        for category in categories {
            catalog.add_category(category)?;
        }
        for product in products {
            catalog.add_product(product)?;
        }
        Ok(catalog)
    }

    pub fn add_user(&mut self, user: User) -> Result<(), CatalogError> {
        if self.user_index.contains_key(&user.id) {
            return Err(CatalogError::DuplicateUser(user.id));
        }
        self.user_index.insert(user.id, self.users.len());
        self.users.push(user);
        Ok(())
    }

    pub fn add_category(&mut self, category: Category) -> Result<(), CatalogError> {
        if self.category_index.contains_key(&category.id) {
            return Err(CatalogError::DuplicateCategory(category.id));
        }
        self.category_index.insert(category.id, self.categories.len());
        self.categories.push(category);
        Ok(())
    }

    pub fn add_product(&mut self, product: Product) -> Result<(), CatalogError> {
        if !self.product_ids.insert(product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    pub fn get_user(&self, id: &UserId) -> Option<&User> {
        self.user_index.get(id).map(|&index| &self.users[index])
    }

    pub fn get_category(&self, id: &CategoryId) -> Option<&Category> {
        self.category_index.get(id).map(|&index| &self.categories[index])
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}
