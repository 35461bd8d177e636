use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::CategoryId;

#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// The text search matches against this name.
    pub name: String,
    pub category_id: CategoryId,
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, category_id: u64) -> Self {
        Product { id: ProductId(id), name: name.into(), category_id: CategoryId(category_id) }
    }
}
