pub mod catalog;

pub use catalog::{CatalogError, Review, ReviewIndex};
