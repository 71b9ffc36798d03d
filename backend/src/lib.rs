//! Storefront backend: catalog queries, facet filter resolution and the
//! server routes that sit outside the dioxus router.

pub mod api;
pub mod catalog_backend;
pub mod filters;
pub mod server_extra;
pub mod shopify_utils;
