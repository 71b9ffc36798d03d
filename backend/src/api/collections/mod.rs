//! Collection query functions and module exports.

mod get_collection;
pub use get_collection::get_collection;

mod list_collections;
pub use list_collections::list_collections;

mod get_collection_filters;
pub use get_collection_filters::get_collection_filters;

mod get_collection_products;
pub use get_collection_products::get_collection_products_filtered;
