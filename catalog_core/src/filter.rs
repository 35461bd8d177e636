//! Filtering of joined catalog rows.
//!
//! A [`FilterState`] holds the search text, the selected owner and the
//! selected categories. It is never modified in place: every transition
//! returns a new state, and [`prepare_rows`] re-evaluates the whole row list
//! against whichever state it is given.

use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

use tracing::debug;

use crate::data::join::Row;

/// The word that selects every owner, both in the UI and on the command line.
pub const ALL: &str = "all";

/// Which owner's products to show.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub enum UserFilter {
    #[default]
    All,
    /// Only the products of the user with exactly this name.
    Named(String),
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FilterState {
    /// Free text matched against product names. Only the trimmed, lower-cased
    /// text is used; an empty or blank query matches everything.
    pub query: String,
    pub selected_user: UserFilter,
    /// Titles of the selected categories. Empty means every category.
    pub selected_categories: BTreeSet<String>,
}

/// A single change to a [`FilterState`], as dispatched by a front end.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FilterAction {
    SetQuery(String),
    ClearQuery,
    SelectUser(UserFilter),
    ToggleCategory(String),
    SelectAllCategories,
    Reset,
}

impl UserFilter {
    pub fn named(name: impl Into<String>) -> Self {
        UserFilter::Named(name.into())
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::Named(selected) => selected == name,
        }
    }
}

impl FromStr for UserFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(UserFilter::All)
        } else {
            Ok(UserFilter::Named(s.to_string()))
        }
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::All => f.write_str(ALL),
            UserFilter::Named(name) => f.write_str(name),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        FilterState { query: query.into(), ..self.clone() }
    }

    pub fn clear_query(&self) -> Self {
        self.with_query(String::new())
    }

    pub fn select_user(&self, selected_user: UserFilter) -> Self {
        FilterState { selected_user, ..self.clone() }
    }

    pub fn select_all_users(&self) -> Self {
        self.select_user(UserFilter::All)
    }

    /// Selects the category if it is not selected yet, and deselects it
    /// otherwise.
    pub fn toggle_category(&self, title: impl Into<String>) -> Self {
        let title = title.into();
        let mut selected_categories = self.selected_categories.clone();
        if !selected_categories.remove(&title) {
            selected_categories.insert(title);
        }
        FilterState { selected_categories, ..self.clone() }
    }

    pub fn select_all_categories(&self) -> Self {
        FilterState { selected_categories: BTreeSet::new(), ..self.clone() }
    }

    pub fn reset(&self) -> Self {
        FilterState::default()
    }

    pub fn apply(&self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetQuery(query) => self.with_query(query),
            FilterAction::ClearQuery => self.clear_query(),
            FilterAction::SelectUser(user) => self.select_user(user),
            FilterAction::ToggleCategory(title) => self.toggle_category(title),
            FilterAction::SelectAllCategories => self.select_all_categories(),
            FilterAction::Reset => self.reset(),
        }
    }

    pub fn is_category_selected(&self, title: &str) -> bool {
        self.selected_categories.contains(title)
    }

    /// Whether any predicate is active, i.e. whether filtering can drop rows.
    pub fn is_active(&self) -> bool {
        !self.normalized_query().is_empty()
            || self.selected_user != UserFilter::All
            || !self.selected_categories.is_empty()
    }

    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

/// Returns the rows that pass every active predicate of `state`, in their
/// original order.
pub fn prepare_rows<'a>(rows: &'a [Row], state: &FilterState) -> Vec<&'a Row> {
    let query = state.normalized_query();

    let prepared: Vec<&Row> = rows
        .iter()
        .filter(|row| query.is_empty() || row.product.name.to_lowercase().contains(&query))
        .filter(|row| state.selected_user.matches(&row.user.name))
        .filter(|row| {
            state.selected_categories.is_empty()
                || state.selected_categories.contains(&row.category.title)
        })
        .collect();

    debug!(total = rows.len(), visible = prepared.len(), "prepared rows");
    prepared
}
