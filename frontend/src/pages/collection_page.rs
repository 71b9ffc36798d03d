use dioxus::prelude::*;

use crate::{
    api::collection_api::get_collection,
    components::{
        collection_filter::product_collection_filter::ProductCollectionFilter,
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::collection_query::CollectionQuery,
};

/// Collection page: metadata header, facet filters and the filtered products.
#[component]
pub fn CollectionPage(collection: String, query: CollectionQuery) -> Element {
    rsx! {
        SuspendWrapper { CollectionHeader { collection: collection.clone() } }
        SuspendWrapper {
            ProductCollectionFilter { collection, query: query.0.clone() }
        }
    }
}

#[component]
fn CollectionHeader(collection: ReadSignal<String>) -> Element {
    let found = use_resource(move || get_collection(collection.read().clone())).suspend()?.cloned();
    let found = match found {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(c) => c,
    };
    let Some(found) = found else {
        return rsx! {
            Title { "Not found" }
            div {
                class: "x-page",
                h1 { "Collection not found" }
                p { "There is no collection called \"{collection}\"." }
            }
        };
    };
    let page_title = found.page_title();
    rsx! {
        Title { "{page_title}" }
        document::Meta { name: "description", content: found.page_description() }
        div {
            class: "x-page",
            h1 { "{found.title}" }
            if !found.description.is_empty() {
                p { "{found.description}" }
            }
        }
    }
}
