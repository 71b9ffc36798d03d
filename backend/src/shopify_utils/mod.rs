pub mod graphql_queries;
pub mod storefront_client;
