use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::collection_query::CollectionQuery;
use crate::pages::collection_page::CollectionPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // filter and sort state lives in the query string so links and form redirects can carry it
    #[route("/search/:collection?:..query")]
    CollectionPage {
        collection: String,
        query: CollectionQuery,
    },

}
