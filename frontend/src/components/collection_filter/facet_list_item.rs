use dioxus::prelude::*;
use common::{active_selection::ActiveSelection, catalog::FacetDefinition};


/// Checkbox list for a LIST facet; submitted by the surrounding form.
#[component]
pub fn FacetListItem(facet: ReadSignal<FacetDefinition>, active_selections: ReadSignal<Vec<ActiveSelection>>) -> Element {
    let facet = facet.read().clone();
    let rows = facet
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let checked = active_selections.read().iter().any(|s| s.matches(&facet.id, &value.id));
            (format!("{}-{}", facet.id, index), value.clone(), checked)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "x-facet",
            div { class: "x-facet-label", "{facet.label}" }
            for (input_id, value, checked) in rows {
                div {
                    key: "{value.id}",
                    class: if value.count == 0 { "x-facet-value x-facet-value-empty" } else { "x-facet-value" },
                    input {
                        id: "{input_id}",
                        name: "{facet.id}",
                        r#type: "checkbox",
                        value: "{value.id}",
                        initial_checked: checked,
                    }
                    label { r#for: "{input_id}", "{value.label}" }
                    if value.count > 0 {
                        span { class: "x-facet-count", "({value.count})" }
                    }
                }
            }
        }
    }
}
