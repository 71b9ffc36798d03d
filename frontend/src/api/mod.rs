pub mod collection_api;
