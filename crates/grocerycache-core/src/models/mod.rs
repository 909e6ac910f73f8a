//! Data models for the grocery catalog.
//!
//! - `Product`: a single catalog record as served by the API
//! - `Category`: the fixed set of storefront sections
//! - `filter_by_category`: the matching rule shared by fresh and cached data

pub mod category;
pub mod product;

pub use category::Category;
pub use product::{filter_by_category, Product};
