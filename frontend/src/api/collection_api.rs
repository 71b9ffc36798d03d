//! Client API calls for collection endpoints.

use common::{active_selection::QueryParams, catalog::Collection, collection_result::FilteredCollection};
use dioxus::prelude::*;


#[server]
pub async fn get_collection(handle: String) -> Result<Option<Collection>, ServerFnError> {
    let x: anyhow::Result<_> = async {
        use backend::catalog_backend::CatalogBackend;
        let client = backend::shopify_utils::storefront_client::get_storefront_client()?;
        client.collection(&handle).await
    }.await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_collections() -> Result<Vec<Collection>, ServerFnError> {
    let x: anyhow::Result<_> = async {
        let client = backend::shopify_utils::storefront_client::get_storefront_client()?;
        backend::api::collections::list_collections(&client).await
    }.await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn collection_products_filtered(collection: String, query: QueryParams) -> Result<FilteredCollection, ServerFnError> {
    let x: anyhow::Result<_> = async {
        let client = backend::shopify_utils::storefront_client::get_storefront_client()?;
        backend::filters::reconcile::collection_products_filtered(&client, &collection, &query, query.sort_slug()).await
    }.await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None })
}
