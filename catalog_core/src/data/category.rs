use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// A short name of the category, e.g. "Grocery". The category filter
    /// selects by this title.
    pub title: String,
    /// An emoji drawn next to the title.
    pub icon: String,
    /// The user responsible for this category.
    pub owner_id: UserId,
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Category {
    pub fn new(id: u64, title: impl Into<String>, icon: impl Into<String>, owner_id: u64) -> Self {
        Category { id: CategoryId(id), title: title.into(), icon: icon.into(), owner_id: UserId(owner_id) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_owner_key_is_camel_case() {
        let category: Category =
            serde_json::from_str(r#"{"id":1,"title":"Grocery","icon":"🍞","ownerId":2}"#).unwrap();
        assert_eq!(category, Category::new(1, "Grocery", "🍞", 2));
    }
}
