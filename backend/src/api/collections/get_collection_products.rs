use common::{catalog::Product, facet_input::ResolvedFilter, filter_const::PRODUCTS_PAGE_SIZE, sort::SortKey};
use serde::Deserialize;

use crate::shopify_utils::{graphql_queries::get_collection_products_filtered_query, storefront_client::StorefrontClient};

#[derive(Debug, Deserialize)]
struct GetCollectionProductsResponse {
    collection: Option<CollectionProducts>,
}

#[derive(Debug, Deserialize)]
struct CollectionProducts {
    products: ProductNodes,
}

#[derive(Debug, Deserialize)]
struct ProductNodes {
    nodes: Vec<Product>,
}

pub async fn get_collection_products_filtered(
    client: &StorefrontClient,
    collection: &str,
    sort_key: SortKey,
    reverse: bool,
    filters: &[ResolvedFilter],
) -> anyhow::Result<Vec<Product>> {
    let response: GetCollectionProductsResponse = client
        .graphql(
            "getCollectionProductsFiltered",
            &get_collection_products_filtered_query(),
            serde_json::json!({
                "handle": collection,
                "sortKey": sort_key,
                "reverse": reverse,
                "filters": filters,
                "first": PRODUCTS_PAGE_SIZE,
            }),
        )
        .await?;
    let Some(found) = response.collection else {
        tracing::warn!("get_collection_products_filtered: no collection {collection}");
        return Ok(vec![]);
    };
    Ok(found.products.nodes)
}
