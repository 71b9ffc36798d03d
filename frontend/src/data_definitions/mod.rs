pub mod collection_query;
