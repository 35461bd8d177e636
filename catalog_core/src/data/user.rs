use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique ID that can be used to refer to a user.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// A person who owns one or more categories.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// The display name. The owner filter compares against this exactly.
    pub name: String,
    /// Only used to pick the colour the name is drawn in.
    pub sex: Sex,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, sex: Sex) -> Self {
        User { id: UserId(id), name: name.into(), sex }
    }
}
