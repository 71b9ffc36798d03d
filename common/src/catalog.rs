//! Catalog models as returned by the storefront backend.
//!
//! Field names follow the GraphQL schema (camelCase), so these types
//! deserialize straight out of a response payload.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacetKind {
    List,
    PriceRange,
    Boolean,
    #[serde(other)]
    Unknown,
}

/// One filterable attribute of a collection, together with its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FacetKind,
    #[serde(default)]
    pub presentation: Option<String>,
    #[serde(default)]
    pub values: Vec<FacetValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub id: String,
    pub label: String,
    pub count: u64,
    /// Serialized backend filter; its shape depends on the parent facet kind.
    pub input: String,
}

impl FacetDefinition {
    pub fn value(&self, value_id: &str) -> Option<&FacetValue> {
        self.values.iter().find(|v| v.id == value_id)
    }
}

pub fn find_facet<'a>(facets: &'a [FacetDefinition], facet_id: &str) -> Option<&'a FacetDefinition> {
    facets.iter().find(|f| f.id == facet_id)
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub seo: Seo,
    pub updated_at: Option<String>,
}

impl Collection {
    pub fn page_title(&self) -> String {
        non_empty(&self.seo.title).unwrap_or(&self.title).to_string()
    }

    pub fn page_description(&self) -> String {
        if let Some(description) = non_empty(&self.seo.description) {
            return description.to_string();
        }
        if !self.description.is_empty() {
            return self.description.clone();
        }
        format!("{} products", self.title)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceRange {
    pub max_variant_price: Money,
    pub min_variant_price: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub available_for_sale: bool,
    pub featured_image: Option<Image>,
    pub price_range: ProductPriceRange,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_definition_reads_backend_payload() {
        let raw = r#"{
            "type": "PRICE_RANGE",
            "label": "Price",
            "id": "filter.v.price",
            "presentation": null,
            "values": [{"count": 0, "id": "filter.v.price", "label": "Price", "input": "{\"price\":{\"min\":0,\"max\":250.0}}"}]
        }"#;
        let facet: FacetDefinition = serde_json::from_str(raw).unwrap();
        assert_eq!(facet.kind, FacetKind::PriceRange);
        assert_eq!(facet.values.len(), 1);
        assert_eq!(facet.values[0].count, 0);
    }

    #[test]
    fn unknown_facet_kind_does_not_fail_deserialization() {
        let raw = r#"{"type": "SWATCH_GRID", "label": "Color", "id": "filter.p.m.color", "values": []}"#;
        let facet: FacetDefinition = serde_json::from_str(raw).unwrap();
        assert_eq!(facet.kind, FacetKind::Unknown);
    }

    #[test]
    fn collection_titles_prefer_seo_fields() {
        let mut collection = Collection {
            handle: "shirts".to_string(),
            title: "Shirts".to_string(),
            description: String::new(),
            seo: Seo::default(),
            updated_at: None,
        };
        assert_eq!(collection.page_title(), "Shirts");
        assert_eq!(collection.page_description(), "Shirts products");

        collection.description = "All our shirts".to_string();
        assert_eq!(collection.page_description(), "All our shirts");

        collection.seo = Seo { title: Some("Buy shirts".to_string()), description: Some(String::new()) };
        assert_eq!(collection.page_title(), "Buy shirts");
        assert_eq!(collection.page_description(), "All our shirts");
    }
}
