use common::{catalog::FacetDefinition, facet_input::ResolvedFilter};
use serde::Deserialize;

use crate::shopify_utils::{graphql_queries::GET_COLLECTION_FILTERS_QUERY, storefront_client::StorefrontClient};

#[derive(Debug, Deserialize)]
struct GetCollectionFiltersResponse {
    collection: Option<CollectionFilters>,
}

#[derive(Debug, Deserialize)]
struct CollectionFilters {
    products: ProductFilters,
}

#[derive(Debug, Deserialize)]
struct ProductFilters {
    filters: Vec<FacetDefinition>,
}

/// Facet definitions of a collection with `filters` applied. An empty filter
/// list gives the full catalog.
pub async fn get_collection_filters(
    client: &StorefrontClient,
    collection: &str,
    filters: &[ResolvedFilter],
) -> anyhow::Result<Vec<FacetDefinition>> {
    let response: GetCollectionFiltersResponse = client
        .graphql(
            "getCollectionProductsFilters",
            GET_COLLECTION_FILTERS_QUERY,
            serde_json::json!({ "handle": collection, "filters": filters }),
        )
        .await?;
    let Some(found) = response.collection else {
        tracing::warn!("get_collection_filters: no collection {collection}");
        return Ok(vec![]);
    };
    Ok(found.products.filters)
}
