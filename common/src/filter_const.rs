//! Query parameter names shared by links, forms and the filter pipeline.

/// Every facet selection travels under a key with this prefix.
pub const FILTER_PREFIX: &str = "filter.";

/// Price range selections, encoded as `<min>:<max>` with either side optional.
pub const FILTER_PRICE_KEY: &str = "filter.v.price";

/// Sort slug key; never treated as a facet.
pub const SORT_KEY: &str = "sort";

/// Separator between the two bounds of a price selection.
pub const PRICE_SEPARATOR: char = ':';

/// Upper bound on products returned for one collection page.
pub const PRODUCTS_PAGE_SIZE: u64 = 100;

/// Form target that turns posted facet fields into a redirect.
pub const APPLY_FILTERS_PATH: &str = "/_apply_filters";

/// Collection pages live under this path prefix.
pub const COLLECTION_PATH_PREFIX: &str = "/search/";
