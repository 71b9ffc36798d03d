//! Per-request pipeline behind a filtered collection page.
//!
//! Selections are resolved against the unfiltered facet catalog, that result
//! narrows a second facet query (so the counts reflect the current
//! selection), and the product query uses filters resolved against the
//! unfiltered catalog again. Facets shown to the shopper therefore come from
//! the narrowed catalog while the product filters keep the shape of the first
//! resolution. The three backend calls run strictly in sequence.

use anyhow::Context;
use common::{
    active_selection::{QueryParams, parse_active_selections},
    collection_result::FilteredCollection,
    sort::resolve_sort,
};

use crate::{catalog_backend::CatalogBackend, filters::filter_resolver::resolve_filters};

pub async fn collection_products_filtered<B: CatalogBackend + ?Sized>(
    backend: &B,
    collection: &str,
    query: &QueryParams,
    sort_slug: Option<&str>,
) -> anyhow::Result<FilteredCollection> {
    let sort = resolve_sort(sort_slug);
    let active_selections = parse_active_selections(query);

    let all_facets = backend
        .collection_filters(collection, &[])
        .await
        .with_context(|| format!("loading facets of collection {collection}"))?;
    let narrowing_filters = resolve_filters(&all_facets, &active_selections);

    let narrowed_facets = backend
        .collection_filters(collection, &narrowing_filters)
        .await
        .with_context(|| format!("loading narrowed facets of collection {collection}"))?;
    let product_filters = resolve_filters(&all_facets, &active_selections);

    let products = backend
        .collection_products(collection, sort.sort_key, sort.reverse, &product_filters)
        .await
        .with_context(|| format!("loading products of collection {collection}"))?;

    tracing::info!(
        "collection {collection}: {} selections, {} filters, {} products, sort {:?}",
        active_selections.len(),
        product_filters.len(),
        products.len(),
        sort.sort_key,
    );

    Ok(FilteredCollection {
        collection: collection.to_string(),
        sort_slug: sort.slug.map(str::to_string),
        facets: narrowed_facets,
        active_selections,
        products,
    })
}
