//! Form target for the collection filter form.

use axum::{
    Form,
    http::{HeaderMap, StatusCode, header::REFERER},
    response::{IntoResponse, Redirect, Response},
};
use common::selection_query::{apply_filter_form, collection_href};

const COLLECTION_FIELD: &str = "collection";

/// Builds the redirect target from the referring page and the submitted form.
pub fn filter_redirect_location(referer: Option<&str>, form: &[(String, String)]) -> anyhow::Result<String> {
    let collection = form
        .iter()
        .find(|(key, _)| key == COLLECTION_FIELD)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    if collection.is_empty() || !collection.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        anyhow::bail!("invalid collection handle: {:?}", collection);
    }

    let referer_query = referer
        .and_then(|r| url::Url::parse(r).ok())
        .and_then(|u| u.query().map(str::to_string))
        .unwrap_or_default();
    Ok(collection_href(collection, &apply_filter_form(&referer_query, form)))
}

pub async fn apply_filters(headers: HeaderMap, Form(form): Form<Vec<(String, String)>>) -> Response {
    let referer = headers.get(REFERER).and_then(|v| v.to_str().ok());
    match filter_redirect_location(referer, &form) {
        Ok(location) => {
            tracing::info!("apply_filters: redirecting to {}", location);
            Redirect::to(&location).into_response()
        }
        Err(e) => {
            tracing::error!("apply_filters: request failed: {:#?}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
