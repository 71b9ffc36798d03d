//! Client-side filter panel. Edits a local copy of the selection state and
//! hands the resulting query string to `navigate` when applied.

use dioxus::prelude::*;
use common::{
    active_selection::{ActiveSelection, QueryParams},
    catalog::{FacetDefinition, FacetKind},
    price_range::format_price_bound,
    selection_query::FacetSelectionState,
};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};


#[component]
pub fn FilterSelection(
    facets: ReadSignal<Vec<FacetDefinition>>,
    query: ReadSignal<QueryParams>,
    active_selections: ReadSignal<Vec<ActiveSelection>>,
    sort_slug: ReadSignal<Option<String>>,
    navigate: Callback<String>,
) -> Element {
    let mut state = use_signal(|| FacetSelectionState::from_selections(&active_selections.read()));
    // start over from the page's selections after every navigation
    use_effect(move || {
        let selections = active_selections.read().clone();
        state.set(FacetSelectionState::from_selections(&selections));
    });
    let list_facets = facets.read().iter().filter(|f| f.kind == FacetKind::List).cloned().collect::<Vec<_>>();
    let min_price = format_price_bound(state.read().price.min);
    let max_price = format_price_bound(state.read().price.max);

    rsx! {
        div {
            class: "x-filter-form",
            div {
                class: "x-facet-value",
                "Price:"
                input {
                    class: "x-price-input",
                    r#type: "number",
                    placeholder: "min",
                    initial_value: "{min_price}",
                    oninput: move |e: FormEvent| state.write().set_min_price(&e.value()),
                }
                input {
                    class: "x-price-input",
                    r#type: "number",
                    placeholder: "max",
                    initial_value: "{max_price}",
                    oninput: move |e: FormEvent| state.write().set_max_price(&e.value()),
                }
            }
            div {
                class: "x-filter-facets",
                for facet in list_facets {
                    div {
                        key: "{facet.id}",
                        class: "x-facet",
                        div { class: "x-facet-label", "{facet.label}" }
                        for value in facet.values.iter().cloned() {
                            SelectionToggle {
                                key: "{value.id}",
                                state,
                                facet_id: facet.id.clone(),
                                value_id: value.id.clone(),
                                label: value.label.clone(),
                            }
                        }
                    }
                }
            }
            div {
                button {
                    class: "x-button",
                    onclick: move |_| navigate(state.read().to_query_string(&query.read(), sort_slug.read().as_deref())),
                    "Apply filters"
                }
            }
        }
    }
}

#[component]
fn SelectionToggle(mut state: Signal<FacetSelectionState>, facet_id: ReadSignal<String>, value_id: ReadSignal<String>, label: ReadSignal<String>) -> Element {
    let is_checked = use_memo(move || state.read().is_selected(&facet_id.read(), &value_id.read()));
    rsx! {
        div {
            class: "x-facet-value",
            onclick: move |_| {
                let facet_id = facet_id.read().clone();
                let value_id = value_id.read().clone();
                state.write().toggle(&facet_id, &value_id);
            },
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            "{label}"
        }
    }
}
