//! Turns facet selections back into query strings for links, redirects and
//! client-side navigation.

use url::form_urlencoded;

use crate::{
    active_selection::{ActiveSelection, QueryParams, parse_active_selections},
    filter_const::{COLLECTION_PATH_PREFIX, FILTER_PREFIX, FILTER_PRICE_KEY, SORT_KEY},
    price_range::{PriceBounds, parse_price_bound},
};


/// Folds every price selection into one range; later bounds win.
/// Returns `None` when there is no price selection at all.
pub fn merge_price_selections<'a>(selections: impl IntoIterator<Item = &'a ActiveSelection>) -> Option<PriceBounds> {
    selections
        .into_iter()
        .filter(|s| s.is_price())
        .map(|s| PriceBounds::from_selection_value(&s.value))
        .reduce(PriceBounds::overlay)
}

/// One pair per non-price selection in input order. All price selections
/// collapse into a single `filter.v.price=<min>:<max>` pair written where the
/// first one appeared. The sort slug, if any, goes last.
pub fn selections_to_query_string(selections: &[ActiveSelection], sort_slug: Option<&str>) -> String {
    let merged_price = merge_price_selections(selections);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut price_written = false;
    for selection in selections {
        if !selection.is_price() {
            serializer.append_pair(&selection.key, &selection.value);
            continue;
        }
        if price_written {
            continue;
        }
        if let Some(bounds) = merged_price {
            serializer.append_pair(FILTER_PRICE_KEY, &bounds.to_selection_value());
        }
        price_written = true;
    }
    if let Some(slug) = sort_slug {
        serializer.append_pair(SORT_KEY, slug);
    }
    serializer.finish()
}

/// Like [`selections_to_query_string`], but parameters of the current page
/// that are neither facets nor the sort key are kept in front.
pub fn query_with_selections(current: &QueryParams, selections: &[ActiveSelection], sort_slug: Option<&str>) -> String {
    let mut preserved = QueryParams::default();
    for (key, value) in &current.entries {
        if !key.starts_with(FILTER_PREFIX) && key != SORT_KEY {
            preserved.entries.push((key.clone(), value.clone()));
        }
    }
    [preserved.to_query_string(), selections_to_query_string(selections, sort_slug)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("&")
}

/// Link to a collection page; the `?` is left out for an empty query.
pub fn collection_href(collection: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{COLLECTION_PATH_PREFIX}{collection}")
    } else {
        format!("{COLLECTION_PATH_PREFIX}{collection}?{query}")
    }
}

/// The filter form posts the price field twice: minimum first, maximum second.
/// Empty fields are unset bounds; two set bounds are put in ascending order.
pub fn form_price_bounds(values: &[&str]) -> PriceBounds {
    let min = values.first().and_then(|v| parse_price_bound(v));
    let max = values.get(1).and_then(|v| parse_price_bound(v));
    match (min, max) {
        (Some(a), Some(b)) if a > b => PriceBounds { min: Some(b), max: Some(a) },
        _ => PriceBounds { min, max },
    }
}

/// Query string for the redirect that follows a filter form submission.
///
/// Parameters of the referring page survive unless they carry the facet
/// prefix; facet parameters, stale price ranges included, are replaced
/// wholesale by what the form submitted.
pub fn apply_filter_form(referer_query: &str, form: &[(String, String)]) -> String {
    let referer_query = referer_query.strip_prefix('?').unwrap_or(referer_query);
    let preserved = form_urlencoded::parse(referer_query.as_bytes())
        .filter(|(key, _)| !key.starts_with(FILTER_PREFIX))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect::<Vec<_>>();

    let mut submitted = QueryParams::default();
    for (key, value) in form {
        if key.starts_with(FILTER_PREFIX) {
            submitted.append(key.clone(), value.clone());
        }
    }
    let pairs = parse_active_selections(&submitted);
    let price_values = pairs.iter().filter(|p| p.is_price()).map(|p| p.value.as_str()).collect::<Vec<_>>();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(preserved.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for pair in pairs.iter().filter(|p| !p.is_price() && !p.value.is_empty()) {
        serializer.append_pair(&pair.key, &pair.value);
    }
    let bounds = form_price_bounds(&price_values);
    if !bounds.is_unbounded() {
        serializer.append_pair(FILTER_PRICE_KEY, &bounds.to_selection_value());
    }
    serializer.finish()
}


/// Editable facet selection state for client-side controls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacetSelectionState {
    pub selections: Vec<ActiveSelection>,
    pub price: PriceBounds,
}

impl FacetSelectionState {
    pub fn from_selections(selections: &[ActiveSelection]) -> Self {
        Self {
            selections: selections.iter().filter(|s| !s.is_price()).cloned().collect(),
            price: merge_price_selections(selections).unwrap_or_default(),
        }
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selections.iter().any(|s| s.matches(key, value))
    }

    pub fn toggle(&mut self, key: &str, value: &str) {
        if self.is_selected(key, value) {
            self.selections.retain(|s| !s.matches(key, value));
        } else {
            self.selections.push(ActiveSelection::new(key, value));
        }
    }

    pub fn set_min_price(&mut self, text: &str) {
        self.price.min = parse_price_bound(text);
    }

    pub fn set_max_price(&mut self, text: &str) {
        self.price.max = parse_price_bound(text);
    }

    pub fn to_selections(&self) -> Vec<ActiveSelection> {
        let mut selections = self.selections.clone();
        if !self.price.is_unbounded() {
            selections.push(ActiveSelection::new(FILTER_PRICE_KEY, self.price.to_selection_value()));
        }
        selections
    }

    /// Query string for the page after applying this state to `current`.
    pub fn to_query_string(&self, current: &QueryParams, sort_slug: Option<&str>) -> String {
        query_with_selections(current, &self.to_selections(), sort_slug)
    }
}
