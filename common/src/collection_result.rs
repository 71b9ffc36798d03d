use serde::{Deserialize, Serialize};

use crate::{
    active_selection::ActiveSelection,
    catalog::{FacetDefinition, Product},
    price_range::PriceBounds,
    selection_query::merge_price_selections,
};


/// Everything a collection page renders for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredCollection {
    pub collection: String,
    pub sort_slug: Option<String>,
    /// Facets re-queried with the current filters applied, so counts are narrowed.
    pub facets: Vec<FacetDefinition>,
    pub active_selections: Vec<ActiveSelection>,
    pub products: Vec<Product>,
}

impl FilteredCollection {
    pub fn is_selected(&self, facet_id: &str, value_id: &str) -> bool {
        self.active_selections.iter().any(|s| s.matches(facet_id, value_id))
    }

    pub fn active_price_bounds(&self) -> PriceBounds {
        merge_price_selections(&self.active_selections).unwrap_or_default()
    }
}
