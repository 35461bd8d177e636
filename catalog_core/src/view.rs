//! What the front ends draw: the product table, the no-results fallback and
//! the filter panel.

use unicode_width::UnicodeWidthStr;

use crate::{
    data::{
        catalog::Catalog,
        category::CategoryId,
        join::Row,
        product::ProductId,
        user::{Sex, UserId},
    },
    filter::{FilterAction, FilterState, UserFilter},
};

pub const COLUMNS: [&str; 4] = ["ID", "Product", "Category", "User"];

pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// How a user's name is coloured.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum UserStyle {
    Link,
    Danger,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TableRow {
    pub id: ProductId,
    pub product: String,
    /// The icon and the title, e.g. "🍺 - Drinks".
    pub category: String,
    pub user: String,
    pub user_style: UserStyle,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TableView {
    Rows(Vec<TableRow>),
    NoMatches,
}

/// Identifies an entry of the filter panel independently of its label.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum PanelKey {
    All,
    User(UserId),
    Category(CategoryId),
}

/// An entry of the filter panel: a label, whether it is highlighted, and the
/// action clicking it dispatches.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PanelEntry {
    pub key: PanelKey,
    pub label: String,
    pub active: bool,
    pub action: FilterAction,
}

impl UserStyle {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => UserStyle::Link,
            Sex::Female => UserStyle::Danger,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            UserStyle::Link => "has-text-link",
            UserStyle::Danger => "has-text-danger",
        }
    }
}

impl From<&Row> for TableRow {
    fn from(row: &Row) -> Self {
        TableRow {
            id: row.product.id,
            product: row.product.name.clone(),
            category: format!("{} - {}", row.category.icon, row.category.title),
            user: row.user.name.clone(),
            user_style: UserStyle::for_sex(row.user.sex),
        }
    }
}

pub fn table_view(rows: &[&Row]) -> TableView {
    if rows.is_empty() {
        TableView::NoMatches
    } else {
        TableView::Rows(rows.iter().map(|&row| TableRow::from(row)).collect())
    }
}

/// "All" followed by one tab per user. "All" is active while no owner is
/// selected; otherwise every user carrying the selected name is.
pub fn owner_tabs(catalog: &Catalog, state: &FilterState) -> Vec<PanelEntry> {
    let all = PanelEntry {
        key: PanelKey::All,
        label: "All".to_string(),
        active: state.selected_user == UserFilter::All,
        action: FilterAction::SelectUser(UserFilter::All),
    };
    let users = catalog.users().map(|user| {
        let filter = UserFilter::named(user.name.clone());
        PanelEntry {
            key: PanelKey::User(user.id),
            label: user.name.clone(),
            active: state.selected_user == filter,
            action: FilterAction::SelectUser(filter),
        }
    });
    std::iter::once(all).chain(users).collect()
}

/// "All" followed by one toggle per category. "All" is active while no
/// category is selected.
pub fn category_buttons(catalog: &Catalog, state: &FilterState) -> Vec<PanelEntry> {
    let all = PanelEntry {
        key: PanelKey::All,
        label: "All".to_string(),
        active: state.selected_categories.is_empty(),
        action: FilterAction::SelectAllCategories,
    };
    let categories = catalog.categories().map(|category| PanelEntry {
        key: PanelKey::Category(category.id),
        label: category.title.clone(),
        active: state.is_category_selected(&category.title),
        action: FilterAction::ToggleCategory(category.title.clone()),
    });
    std::iter::once(all).chain(categories).collect()
}

/// Lays the table out as plain text aligned by terminal display width, so
/// wide emoji icons keep the columns straight. Returns the fallback message
/// when there is nothing to show.
pub fn render_text(view: &TableView) -> String {
    let rows = match view {
        TableView::NoMatches => return format!("{NO_MATCHES_MESSAGE}\n"),
        TableView::Rows(rows) => rows,
    };

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [row.id.0.to_string(), row.product.clone(), row.category.clone(), row.user.clone()]
        })
        .collect();

    let mut widths = COLUMNS.map(|column| column.width());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &COLUMNS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    write_line(&mut out, &rule, &widths);
    for line in &cells {
        write_line(&mut out, line, &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
