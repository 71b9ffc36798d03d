use dioxus::prelude::*;
use common::{
    active_selection::{ActiveSelection, QueryParams},
    selection_query::{collection_href, query_with_selections},
    sort::SORTING,
};


/// Sort links that keep the current facet selections and other page parameters.
#[component]
pub fn SortOptions(
    collection: ReadSignal<String>,
    query: ReadSignal<QueryParams>,
    active_selections: ReadSignal<Vec<ActiveSelection>>,
    sort_slug: ReadSignal<Option<String>>,
) -> Element {
    let links = SORTING
        .iter()
        .map(|option| {
            let query_string = query_with_selections(&query.read(), &active_selections.read(), option.slug);
            let href = collection_href(&collection.read(), &query_string);
            let is_active = sort_slug.read().as_deref() == option.slug;
            (option.title, href, is_active)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "x-sort-options",
            span { class: "x-facet-label", "Sort by" }
            for (title, href, is_active) in links {
                a {
                    key: "{href}",
                    href: "{href}",
                    class: if is_active { "x-sort-option-active" } else { "" },
                    "{title}"
                }
            }
        }
    }
}
