use dioxus::prelude::*;

use crate::{
    api::collection_api::list_collections,
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    data_definitions::collection_query::CollectionQuery,
    routes::Route,
};

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Collections" }
        div {
            class: "x-page",
            h1 { "Collections" }
            SuspendWrapper { CollectionList {} }
        }
    }
}

#[component]
fn CollectionList() -> Element {
    let collections = use_resource(list_collections).suspend()?.cloned();
    let collections = match collections {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(c) => c,
    };
    rsx! {
        ul {
            for collection in collections {
                li {
                    key: "{collection.handle}",
                    Link {
                        to: Route::CollectionPage {
                            collection: collection.handle.clone(),
                            query: CollectionQuery::default(),
                        },
                        "{collection.title}"
                    }
                }
            }
        }
    }
}
