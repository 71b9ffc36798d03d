use dioxus::prelude::*;
use common::{catalog::FacetDefinition, price_range::{PriceBounds, format_price_bound}};


/// Min and max inputs for a PRICE_RANGE facet. Both inputs share the facet id
/// as their name; the form handler reads them in order.
#[component]
pub fn FacetPriceItem(facet: ReadSignal<FacetDefinition>, active_price: ReadSignal<PriceBounds>) -> Element {
    let facet = facet.read().clone();
    let min = format_price_bound(active_price.read().min);
    let max = format_price_bound(active_price.read().max);
    rsx! {
        div {
            class: "x-facet",
            div { class: "x-facet-label", "{facet.label}" }
            div {
                class: "x-facet-value",
                input {
                    class: "x-price-input",
                    name: "{facet.id}",
                    r#type: "number",
                    placeholder: "Min",
                    initial_value: "{min}",
                }
                input {
                    class: "x-price-input",
                    name: "{facet.id}",
                    r#type: "number",
                    placeholder: "Max",
                    initial_value: "{max}",
                }
            }
        }
    }
}
