pub mod data;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod view;

pub use data::{
    catalog::Catalog,
    category::{Category, CategoryId},
    join::{join, Row},
    product::{Product, ProductId},
    user::{Sex, User, UserId},
};
pub use error::CatalogError;
pub use filter::{prepare_rows, FilterAction, FilterState, UserFilter};
