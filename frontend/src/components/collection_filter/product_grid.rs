use dioxus::prelude::*;
use common::catalog::Product;


#[component]
pub fn ProductGrid(products: ReadSignal<Vec<Product>>) -> Element {
    if products.read().is_empty() {
        return rsx! {
            p { class: "x-facet-count", "No products match the selected filters." }
        };
    }
    rsx! {
        div {
            class: "x-product-grid",
            for product in products.read().iter().cloned() {
                ProductCard { key: "{product.id}", product }
            }
        }
    }
}

#[component]
fn ProductCard(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();
    let price = &product.price_range.max_variant_price;
    rsx! {
        div {
            class: "x-product-card",
            if let Some(image) = product.featured_image.clone() {
                img {
                    src: "{image.url}",
                    alt: image.alt_text.clone().unwrap_or(product.title.clone()),
                }
            }
            div { class: "x-facet-label", "{product.title}" }
            div { "{price.amount} {price.currency_code}" }
            if !product.available_for_sale {
                div { class: "x-facet-count", "Sold out" }
            }
        }
    }
}
