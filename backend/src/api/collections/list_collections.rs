use common::catalog::Collection;
use serde::Deserialize;

use crate::shopify_utils::{graphql_queries::get_collections_query, storefront_client::StorefrontClient};

#[derive(Debug, Deserialize)]
struct GetCollectionsResponse {
    collections: Connection,
}

#[derive(Debug, Deserialize)]
struct Connection {
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct Edge {
    node: Collection,
}

/// Collections whose handle starts with this are kept out of navigation.
const HIDDEN_COLLECTION_PREFIX: &str = "hidden";

pub async fn list_collections(client: &StorefrontClient) -> anyhow::Result<Vec<Collection>> {
    let response: GetCollectionsResponse = client
        .graphql("getCollections", &get_collections_query(), serde_json::json!({}))
        .await?;
    Ok(visible_collections(response.collections.edges.into_iter().map(|edge| edge.node)))
}

fn visible_collections(collections: impl Iterator<Item = Collection>) -> Vec<Collection> {
    collections.filter(|c| !c.handle.starts_with(HIDDEN_COLLECTION_PREFIX)).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_collections_are_skipped() {
        let raw = r#"{"collections": {"edges": [
            {"node": {"handle": "hidden-homepage-featured", "title": "Featured", "description": "", "seo": {"title": null, "description": null}, "updatedAt": null}},
            {"node": {"handle": "shirts", "title": "Shirts", "description": "", "seo": {"title": null, "description": null}, "updatedAt": "2024-01-01T00:00:00Z"}}
        ]}}"#;
        let response: GetCollectionsResponse = serde_json::from_str(raw).unwrap();
        let collections = visible_collections(response.collections.edges.into_iter().map(|edge| edge.node));
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].handle, "shirts");
    }
}
