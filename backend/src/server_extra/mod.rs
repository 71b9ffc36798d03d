//! Axum routes mounted next to the dioxus router.

pub mod apply_filters;
