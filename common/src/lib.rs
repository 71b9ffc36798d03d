//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter_const;
pub mod catalog;
pub mod active_selection;
pub mod price_range;
pub mod facet_input;
pub mod sort;
pub mod selection_query;
pub mod collection_result;
