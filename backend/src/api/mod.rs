//! Catalog queries against the storefront API.

pub mod collections;
