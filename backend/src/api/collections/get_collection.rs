use common::catalog::Collection;
use serde::Deserialize;

use crate::shopify_utils::{graphql_queries::get_collection_query, storefront_client::StorefrontClient};

#[derive(Debug, Deserialize)]
struct GetCollectionResponse {
    collection: Option<Collection>,
}

/// `None` when the store has no collection with this handle.
pub async fn get_collection(client: &StorefrontClient, handle: &str) -> anyhow::Result<Option<Collection>> {
    let response: GetCollectionResponse = client
        .graphql("getCollection", &get_collection_query(), serde_json::json!({ "handle": handle }))
        .await?;
    Ok(response.collection)
}
