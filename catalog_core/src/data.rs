pub mod catalog;
pub mod category;
pub mod join;
pub mod product;
pub mod user;
