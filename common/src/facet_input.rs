//! Typed view over the opaque `input` payload of a facet value.
//!
//! The backend hands every facet value a serialized filter object whose shape
//! depends on the kind of the facet it belongs to. Each kind gets its own
//! parse function; a payload of the wrong shape parses to `None`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{catalog::FacetKind, price_range::PriceBounds};


/// A backend-shaped filter object, ready for a product query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedFilter(pub Map<String, Value>);

impl ResolvedFilter {
    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FacetInput {
    /// Returned verbatim as the filter, e.g. `{"tag":"red"}`.
    List(Map<String, Value>),
    /// Template for a price filter; always holds a `price` object.
    PriceRange(Map<String, Value>),
}

impl FacetInput {
    pub fn parse(kind: FacetKind, raw: &str) -> Option<Self> {
        match kind {
            FacetKind::List => parse_object(raw).map(FacetInput::List),
            FacetKind::PriceRange => Some(FacetInput::PriceRange(parse_price_template(Some(raw)))),
            // boolean filters are not built from their payload yet
            FacetKind::Boolean | FacetKind::Unknown => None,
        }
    }
}

pub fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Falls back to `{"price":{}}` when the payload is missing or malformed.
pub fn parse_price_template(raw: Option<&str>) -> Map<String, Value> {
    let mut template = raw.and_then(parse_object).unwrap_or_default();
    if !matches!(template.get("price"), Some(Value::Object(_))) {
        template.insert("price".to_string(), Value::Object(Map::new()));
    }
    template
}

/// Builds a price filter in the template's shape. Only the bounds set in
/// `bounds` end up in the filter.
pub fn price_filter(mut template: Map<String, Value>, bounds: PriceBounds) -> ResolvedFilter {
    let mut price = match template.remove("price") {
        Some(Value::Object(price)) => price,
        _ => Map::new(),
    };
    price.remove("min");
    price.remove("max");
    if let Some(min) = bounds.min {
        price.insert("min".to_string(), Value::from(min));
    }
    if let Some(max) = bounds.max {
        price.insert("max".to_string(), Value::from(max));
    }
    template.insert("price".to_string(), Value::Object(price));
    ResolvedFilter(template)
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn list_input_must_be_an_object() {
        assert!(matches!(FacetInput::parse(FacetKind::List, r#"{"tag":"red"}"#), Some(FacetInput::List(_))));
        assert_eq!(FacetInput::parse(FacetKind::List, r#""red""#), None);
        assert_eq!(FacetInput::parse(FacetKind::List, "[1,2]"), None);
        assert_eq!(FacetInput::parse(FacetKind::List, "{not json"), None);
    }

    #[test]
    fn malformed_price_template_falls_back_to_empty_price() {
        assert_eq!(Value::Object(parse_price_template(None)), json!({"price": {}}));
        assert_eq!(Value::Object(parse_price_template(Some("oops"))), json!({"price": {}}));
        assert_eq!(Value::Object(parse_price_template(Some(r#"{"price": 3}"#))), json!({"price": {}}));
    }

    #[test]
    fn price_filter_replaces_template_bounds() {
        let template = parse_price_template(Some(r#"{"price":{"min":0,"max":250.0}}"#));
        let filter = price_filter(template, PriceBounds { min: Some(10.0), max: None });
        assert_eq!(filter.as_value(), json!({"price": {"min": 10.0}}));
    }

    #[test]
    fn unknown_and_boolean_kinds_have_no_input() {
        assert_eq!(FacetInput::parse(FacetKind::Unknown, "{}"), None);
        assert_eq!(FacetInput::parse(FacetKind::Boolean, r#"{"available":true}"#), None);
        assert_eq!(FacetInput::parse(FacetKind::Boolean, "true"), None);
    }
}
