//! Filter form plus the product grid for one collection.

use dioxus::prelude::*;
use common::{active_selection::QueryParams, catalog::FacetKind, filter_const::APPLY_FILTERS_PATH};

use crate::{
    api::collection_api::collection_products_filtered,
    components::{
        collection_filter::{
            facet_list_item::FacetListItem, facet_price_item::FacetPriceItem, filter_selection::FilterSelection,
            product_grid::ProductGrid, sort_options::SortOptions,
        },
        error_boundary::ComponentErrorDisplay,
    },
    data_definitions::collection_query::CollectionQuery,
    routes::Route,
};

#[component]
pub fn ProductCollectionFilter(collection: ReadSignal<String>, query: ReadSignal<QueryParams>) -> Element {
    let filtered = use_resource(move || {
        let q = query.read().clone();
        collection_products_filtered(collection.read().clone(), q)
    }).suspend()?.cloned();
    let filtered = match filtered {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(f) => f,
    };
    let active_price = filtered.active_price_bounds();
    let facet_items = filtered.facets.iter().cloned().map(|facet| {
        let key = facet.id.clone();
        let active_selections = filtered.active_selections.clone();
        match facet.kind {
            FacetKind::List => rsx! { FacetListItem { key: "{key}", facet, active_selections } },
            FacetKind::PriceRange => rsx! { FacetPriceItem { key: "{key}", facet, active_price } },
            FacetKind::Boolean | FacetKind::Unknown => rsx! {},
        }
    });

    let navigate = Callback::new(move |query_string: String| {
        navigator().push(Route::CollectionPage {
            collection: collection.read().clone(),
            query: CollectionQuery::from(query_string.as_str()),
        });
    });

    rsx! {
        div {
            class: "x-page",
            SortOptions {
                collection,
                query,
                active_selections: filtered.active_selections.clone(),
                sort_slug: filtered.sort_slug.clone(),
            }
            form {
                class: "x-filter-form",
                action: APPLY_FILTERS_PATH,
                method: "post",
                input { r#type: "hidden", name: "collection", value: "{collection}" }
                div {
                    class: "x-filter-facets",
                    {facet_items}
                }
                div {
                    input { class: "x-button", r#type: "submit", value: "Apply Filters" }
                }
            }
            details {
                summary { "Quick filters" }
                FilterSelection {
                    facets: filtered.facets.clone(),
                    query,
                    active_selections: filtered.active_selections.clone(),
                    sort_slug: filtered.sort_slug.clone(),
                    navigate,
                }
            }
            ProductGrid { products: filtered.products.clone() }
        }
    }
}
