//! The three catalog queries the filter pipeline depends on.

use async_trait::async_trait;
use common::{
    catalog::{Collection, FacetDefinition, Product},
    facet_input::ResolvedFilter,
    sort::SortKey,
};

use crate::{api::collections, shopify_utils::storefront_client::StorefrontClient};

#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Facet definitions and counts for `collection` with `filters` applied.
    async fn collection_filters(&self, collection: &str, filters: &[ResolvedFilter]) -> anyhow::Result<Vec<FacetDefinition>>;

    async fn collection_products(
        &self,
        collection: &str,
        sort_key: SortKey,
        reverse: bool,
        filters: &[ResolvedFilter],
    ) -> anyhow::Result<Vec<Product>>;

    async fn collection(&self, handle: &str) -> anyhow::Result<Option<Collection>>;
}

#[async_trait]
impl CatalogBackend for StorefrontClient {
    async fn collection_filters(&self, collection: &str, filters: &[ResolvedFilter]) -> anyhow::Result<Vec<FacetDefinition>> {
        collections::get_collection_filters(self, collection, filters).await
    }

    async fn collection_products(
        &self,
        collection: &str,
        sort_key: SortKey,
        reverse: bool,
        filters: &[ResolvedFilter],
    ) -> anyhow::Result<Vec<Product>> {
        collections::get_collection_products_filtered(self, collection, sort_key, reverse, filters).await
    }

    async fn collection(&self, handle: &str) -> anyhow::Result<Option<Collection>> {
        collections::get_collection(self, handle).await
    }
}
