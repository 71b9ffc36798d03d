pub mod collection_filter;
pub mod error_boundary;
pub mod navbar;
pub mod suspend_boundary;
