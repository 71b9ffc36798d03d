//! Request query parameters and the facet selections found in them.

use serde::{Deserialize, Serialize};

use crate::filter_const::{FILTER_PREFIX, FILTER_PRICE_KEY, SORT_KEY};


/// A user-chosen facet value, as it appears in the query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSelection {
    pub key: String,
    pub value: String,
}

impl ActiveSelection {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }

    pub fn is_price(&self) -> bool {
        self.key == FILTER_PRICE_KEY
    }

    pub fn matches(&self, facet_id: &str, value_id: &str) -> bool {
        self.key == facet_id && self.value == value_id
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryParamValue {
    Single(String),
    Many(Vec<String>),
    Absent,
}

/// Query parameters keyed in first-seen order. Repeated keys collapse into
/// [`QueryParamValue::Many`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryParams {
    pub entries: Vec<(String, QueryParamValue)>,
}

impl QueryParams {
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.append(key.into_owned(), value.into_owned());
        }
        params
    }

    pub fn append(&mut self, key: String, value: String) {
        let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) else {
            self.entries.push((key, QueryParamValue::Single(value)));
            return;
        };
        *existing = match std::mem::replace(existing, QueryParamValue::Absent) {
            QueryParamValue::Single(first) => QueryParamValue::Many(vec![first, value]),
            QueryParamValue::Many(mut values) => {
                values.push(value);
                QueryParamValue::Many(values)
            }
            QueryParamValue::Absent => QueryParamValue::Single(value),
        };
    }

    pub fn get(&self, key: &str) -> Option<&QueryParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// First value stored under `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            QueryParamValue::Single(value) => Some(value.as_str()),
            QueryParamValue::Many(values) => values.first().map(|v| v.as_str()),
            QueryParamValue::Absent => None,
        }
    }

    pub fn sort_slug(&self) -> Option<&str> {
        self.first(SORT_KEY)
    }

    /// Re-encodes the parameters; repeated keys are written next to each other.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            match value {
                QueryParamValue::Single(v) => {
                    serializer.append_pair(key, v);
                }
                QueryParamValue::Many(vs) => {
                    for v in vs {
                        serializer.append_pair(key, v);
                    }
                }
                QueryParamValue::Absent => {}
            }
        }
        serializer.finish()
    }
}


pub fn parse_active_selections(params: &QueryParams) -> Vec<ActiveSelection> {
    params
        .entries
        .iter()
        .filter(|(key, _)| key.starts_with(FILTER_PREFIX))
        .flat_map(|(key, value)| match value {
            QueryParamValue::Single(v) => vec![ActiveSelection::new(key.clone(), v.clone())],
            QueryParamValue::Many(vs) => vs.iter().map(|v| ActiveSelection::new(key.clone(), v.clone())).collect(),
            QueryParamValue::Absent => vec![],
        })
        .collect()
}
