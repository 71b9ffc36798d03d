//! Query string carried by the collection route.

use std::fmt::Display;

use common::active_selection::QueryParams;
use serde::{Deserialize, Serialize};


// The router builds this from the raw query string and prints it back with Display
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CollectionQuery(pub QueryParams);

impl From<&str> for CollectionQuery {
    fn from(query: &str) -> Self {
        CollectionQuery(QueryParams::from_query_string(query))
    }
}

impl From<QueryParams> for CollectionQuery {
    fn from(value: QueryParams) -> Self {
        CollectionQuery(value)
    }
}

impl Display for CollectionQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_query_string())
    }
}
