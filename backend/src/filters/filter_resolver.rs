//! Maps active selections onto backend filter objects.

use common::{
    active_selection::ActiveSelection,
    catalog::{FacetDefinition, FacetKind, find_facet},
    facet_input::{FacetInput, ResolvedFilter, parse_price_template, price_filter},
    price_range::PriceBounds,
};

/// `None` covers every stale or unusable selection: unknown facet, unknown
/// value, payload of the wrong shape, and boolean facets (not supported yet).
pub fn resolve_filter(facets: &[FacetDefinition], selection: &ActiveSelection) -> Option<ResolvedFilter> {
    let facet = find_facet(facets, &selection.key)?;
    match facet.kind {
        FacetKind::PriceRange => {
            // the first value carries the filter template for the whole range
            let template = match facet.values.first().and_then(|v| FacetInput::parse(facet.kind, &v.input)) {
                Some(FacetInput::PriceRange(template)) => template,
                _ => parse_price_template(None),
            };
            Some(price_filter(template, PriceBounds::from_selection_value(&selection.value)))
        }
        FacetKind::List => {
            let value = facet.value(&selection.value)?;
            match FacetInput::parse(facet.kind, &value.input)? {
                FacetInput::List(filter) => Some(ResolvedFilter(filter)),
                _ => None,
            }
        }
        FacetKind::Boolean | FacetKind::Unknown => None,
    }
}

/// Resolves every selection in order and drops the ones that resolve to nothing.
pub fn resolve_filters(facets: &[FacetDefinition], selections: &[ActiveSelection]) -> Vec<ResolvedFilter> {
    selections
        .iter()
        .filter_map(|selection| {
            let resolved = resolve_filter(facets, selection);
            if resolved.is_none() {
                tracing::debug!("dropping stale filter selection {}={}", selection.key, selection.value);
            }
            resolved
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use common::{catalog::FacetValue, filter_const::FILTER_PRICE_KEY};
    use serde_json::json;

    use super::*;

    fn value(id: &str, input: &str) -> FacetValue {
        FacetValue { id: id.to_string(), label: id.to_string(), count: 3, input: input.to_string() }
    }

    fn facet(id: &str, kind: FacetKind, values: Vec<FacetValue>) -> FacetDefinition {
        FacetDefinition { id: id.to_string(), label: id.to_string(), kind, presentation: None, values }
    }

    fn catalog() -> Vec<FacetDefinition> {
        vec![
            facet("filter.color", FacetKind::List, vec![
                value("red", r#"{"tag":"red"}"#),
                value("broken", "{oops"),
                value("scalar", "42"),
            ]),
            facet(FILTER_PRICE_KEY, FacetKind::PriceRange, vec![value(FILTER_PRICE_KEY, r#"{"price":{"min":0,"max":250.0}}"#)]),
            facet("filter.v.availability", FacetKind::Boolean, vec![value("1", r#"{"available":true}"#)]),
        ]
    }

    fn price(value: &str) -> serde_json::Value {
        resolve_filter(&catalog(), &ActiveSelection::new(FILTER_PRICE_KEY, value)).unwrap().as_value()
    }

    #[test]
    fn unknown_facet_resolves_to_none() {
        assert_eq!(resolve_filter(&catalog(), &ActiveSelection::new("filter.size", "M")), None);
        assert_eq!(resolve_filter(&[], &ActiveSelection::new(FILTER_PRICE_KEY, "1:2")), None);
    }

    #[test]
    fn list_value_input_is_returned_verbatim() {
        let filter = resolve_filter(&catalog(), &ActiveSelection::new("filter.color", "red")).unwrap();
        assert_eq!(filter.as_value(), json!({"tag": "red"}));
    }

    #[test]
    fn list_value_with_bad_payload_or_unknown_id_is_dropped() {
        assert_eq!(resolve_filter(&catalog(), &ActiveSelection::new("filter.color", "blue")), None);
        assert_eq!(resolve_filter(&catalog(), &ActiveSelection::new("filter.color", "broken")), None);
        assert_eq!(resolve_filter(&catalog(), &ActiveSelection::new("filter.color", "scalar")), None);
    }

    #[test]
    fn price_bounds_follow_the_selection() {
        assert_eq!(price("10:"), json!({"price": {"min": 10.0}}));
        assert_eq!(price(":20"), json!({"price": {"max": 20.0}}));
        assert_eq!(price("10:20"), json!({"price": {"min": 10.0, "max": 20.0}}));
        assert_eq!(price(":"), json!({"price": {}}));
        assert_eq!(price("ten:20"), json!({"price": {"max": 20.0}}));
    }

    #[test]
    fn price_facet_without_values_uses_empty_template() {
        let facets = vec![facet(FILTER_PRICE_KEY, FacetKind::PriceRange, vec![])];
        let filter = resolve_filter(&facets, &ActiveSelection::new(FILTER_PRICE_KEY, "5:")).unwrap();
        assert_eq!(filter.as_value(), json!({"price": {"min": 5.0}}));
    }

    #[test]
    fn boolean_facets_never_resolve() {
        assert_eq!(resolve_filter(&catalog(), &ActiveSelection::new("filter.v.availability", "1")), None);
        assert_eq!(resolve_filter(&catalog(), &ActiveSelection::new("filter.v.availability", "")), None);
    }

    #[test]
    fn resolving_twice_gives_the_same_filters() {
        let facets = catalog();
        let selections = vec![
            ActiveSelection::new(FILTER_PRICE_KEY, "10:50"),
            ActiveSelection::new("filter.color", "red"),
            ActiveSelection::new("filter.size", "XL"),
        ];
        let first = resolve_filters(&facets, &selections);
        let second = resolve_filters(&facets, &selections);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(facets, catalog());
    }
}
