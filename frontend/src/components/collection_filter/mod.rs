//! Facet filter controls and the filtered product grid of a collection page.

pub mod facet_list_item;
pub mod facet_price_item;
pub mod filter_selection;
pub mod product_collection_filter;
pub mod product_grid;
pub mod sort_options;
