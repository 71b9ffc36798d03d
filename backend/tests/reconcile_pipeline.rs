use std::sync::Mutex;

use async_trait::async_trait;
use backend::{catalog_backend::CatalogBackend, filters::reconcile::collection_products_filtered};
use common::{
    active_selection::{ActiveSelection, QueryParams},
    catalog::{Collection, FacetDefinition, FacetKind, FacetValue, Money, Product, ProductPriceRange},
    facet_input::ResolvedFilter,
    sort::SortKey,
};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Filters(Vec<serde_json::Value>),
    Products { sort_key: SortKey, reverse: bool, filters: Vec<serde_json::Value> },
}

/// In-memory catalog. Once any filter is applied the facets narrow: counts
/// drop to 1, `blue` disappears and `red` carries a different input.
struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    fail_products: bool,
}

impl RecordingBackend {
    fn new() -> Self {
        Self { calls: Mutex::new(vec![]), fail_products: false }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

fn values(filters: &[ResolvedFilter]) -> Vec<serde_json::Value> {
    filters.iter().map(|f| f.as_value()).collect()
}

fn facet_value(id: &str, count: u64, input: &str) -> FacetValue {
    FacetValue { id: id.to_string(), label: id.to_string(), count, input: input.to_string() }
}

fn catalog(count: u64, color_values: Vec<FacetValue>) -> Vec<FacetDefinition> {
    vec![
        FacetDefinition {
            id: "filter.color".to_string(),
            label: "Color".to_string(),
            kind: FacetKind::List,
            presentation: Some("TEXT".to_string()),
            values: color_values,
        },
        FacetDefinition {
            id: "filter.v.price".to_string(),
            label: "Price".to_string(),
            kind: FacetKind::PriceRange,
            presentation: None,
            values: vec![facet_value("filter.v.price", 0, r#"{"price":{"min":0,"max":100.0}}"#)],
        },
        FacetDefinition {
            id: "filter.v.availability".to_string(),
            label: "Availability".to_string(),
            kind: FacetKind::Boolean,
            presentation: None,
            values: vec![facet_value("1", count, r#"{"available":true}"#)],
        },
    ]
}

fn unfiltered_catalog() -> Vec<FacetDefinition> {
    catalog(5, vec![facet_value("red", 5, r#"{"tag":"red"}"#), facet_value("blue", 5, r#"{"tag":"blue"}"#)])
}

fn narrowed_catalog() -> Vec<FacetDefinition> {
    catalog(1, vec![facet_value("red", 1, r#"{"tag":"red-narrowed"}"#)])
}

fn product(handle: &str) -> Product {
    let money = Money { amount: "19.0".to_string(), currency_code: "USD".to_string() };
    Product {
        id: format!("gid://shopify/Product/{handle}"),
        handle: handle.to_string(),
        title: handle.to_string(),
        available_for_sale: true,
        featured_image: None,
        price_range: ProductPriceRange { max_variant_price: money.clone(), min_variant_price: money },
    }
}

#[async_trait]
impl CatalogBackend for RecordingBackend {
    async fn collection_filters(&self, _collection: &str, filters: &[ResolvedFilter]) -> anyhow::Result<Vec<FacetDefinition>> {
        self.calls.lock().unwrap().push(Call::Filters(values(filters)));
        Ok(if filters.is_empty() { unfiltered_catalog() } else { narrowed_catalog() })
    }

    async fn collection_products(
        &self,
        _collection: &str,
        sort_key: SortKey,
        reverse: bool,
        filters: &[ResolvedFilter],
    ) -> anyhow::Result<Vec<Product>> {
        self.calls.lock().unwrap().push(Call::Products { sort_key, reverse, filters: values(filters) });
        if self.fail_products {
            anyhow::bail!("storefront unavailable");
        }
        Ok(vec![product("tee")])
    }

    async fn collection(&self, _handle: &str) -> anyhow::Result<Option<Collection>> {
        Ok(None)
    }
}

#[tokio::test]
async fn price_and_list_selections_reach_every_query() {
    let backend = RecordingBackend::new();
    let query = QueryParams::from_query_string("filter.v.price=10%3A50&filter.color=red&sort=price-asc");

    let result = collection_products_filtered(&backend, "shirts", &query, query.sort_slug()).await.unwrap();

    let expected_filters = vec![json!({"price": {"min": 10.0, "max": 50.0}}), json!({"tag": "red"})];
    assert_eq!(
        backend.calls(),
        vec![
            Call::Filters(vec![]),
            Call::Filters(expected_filters.clone()),
            Call::Products { sort_key: SortKey::Price, reverse: false, filters: expected_filters },
        ]
    );
    assert_eq!(result.sort_slug.as_deref(), Some("price-asc"));
    assert_eq!(result.products.len(), 1);
    assert_eq!(
        result.active_selections,
        vec![ActiveSelection::new("filter.v.price", "10:50"), ActiveSelection::new("filter.color", "red")]
    );
}

#[tokio::test]
async fn rendered_facets_come_from_the_narrowed_catalog() {
    let backend = RecordingBackend::new();
    let query = QueryParams::from_query_string("filter.color=red");

    let result = collection_products_filtered(&backend, "shirts", &query, None).await.unwrap();

    assert_eq!(result.facets, narrowed_catalog());
    assert!(result.is_selected("filter.color", "red"));
    assert!(!result.is_selected("filter.color", "blue"));
}

#[tokio::test]
async fn product_filters_keep_the_unfiltered_catalog_inputs() {
    let backend = RecordingBackend::new();
    let query = QueryParams::from_query_string("filter.color=red&filter.color=blue");

    let result = collection_products_filtered(&backend, "shirts", &query, None).await.unwrap();

    let unfiltered_inputs = vec![json!({"tag": "red"}), json!({"tag": "blue"})];
    assert_eq!(
        backend.calls(),
        vec![
            Call::Filters(vec![]),
            Call::Filters(unfiltered_inputs.clone()),
            Call::Products { sort_key: SortKey::Relevance, reverse: false, filters: unfiltered_inputs },
        ]
    );
    // blue is gone from the narrowed facets but still filters the products
    assert!(result.facets[0].value("blue").is_none());
    assert!(result.is_selected("filter.color", "blue"));
}

#[tokio::test]
async fn empty_query_issues_unfiltered_product_query() {
    let backend = RecordingBackend::new();

    let result = collection_products_filtered(&backend, "shirts", &QueryParams::default(), None).await.unwrap();

    assert_eq!(
        backend.calls(),
        vec![
            Call::Filters(vec![]),
            Call::Filters(vec![]),
            Call::Products { sort_key: SortKey::Relevance, reverse: false, filters: vec![] },
        ]
    );
    assert!(result.active_selections.is_empty());
    assert_eq!(result.sort_slug, None);
}

#[tokio::test]
async fn stale_and_boolean_selections_are_dropped_and_unknown_sort_falls_back() {
    let backend = RecordingBackend::new();
    let query = QueryParams::from_query_string("filter.size=XL&filter.color=green&filter.v.availability=1&filter.color=blue");

    let result = collection_products_filtered(&backend, "shirts", &query, Some("cheapest")).await.unwrap();

    let calls = backend.calls();
    assert_eq!(
        calls[2],
        Call::Products { sort_key: SortKey::Relevance, reverse: false, filters: vec![json!({"tag": "blue"})] }
    );
    assert_eq!(result.active_selections.len(), 4);
    assert_eq!(result.sort_slug, None);
}

#[tokio::test]
async fn backend_failure_propagates() {
    let backend = RecordingBackend { calls: Mutex::new(vec![]), fail_products: true };
    let query = QueryParams::from_query_string("filter.color=red");

    let err = collection_products_filtered(&backend, "shirts", &query, Some("price-desc")).await.unwrap_err();

    assert!(format!("{err:#}").contains("storefront unavailable"));
    assert_eq!(backend.calls().len(), 3);
}
