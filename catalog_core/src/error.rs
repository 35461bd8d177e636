use thiserror::Error;

use crate::data::{category::CategoryId, product::ProductId, user::UserId};

/// Errors raised while building a catalog or joining its collections.
/// Filtering itself never fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("user {0} is already present in the catalog")]
    DuplicateUser(UserId),

    #[error("category {0} is already present in the catalog")]
    DuplicateCategory(CategoryId),

    #[error("product {0} is already present in the catalog")]
    DuplicateProduct(ProductId),

    #[error("product {product} refers to unknown category {category}")]
    UnknownCategory { product: ProductId, category: CategoryId },

    #[error("category {category} refers to unknown owner {owner}")]
    UnknownOwner { category: CategoryId, owner: UserId },

    #[error("malformed fixture data: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("could not read fixture data: {0}")]
    Io(#[from] std::io::Error),
}
