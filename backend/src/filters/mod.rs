//! Facet filter resolution and the per-request reconciliation pipeline.

pub mod filter_resolver;
pub mod reconcile;
