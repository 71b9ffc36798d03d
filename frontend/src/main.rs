//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            // plain HTML form posts land here and are answered with a redirect
            .route(common::filter_const::APPLY_FILTERS_PATH, axum::routing::post(backend::server_extra::apply_filters::apply_filters)))
    });
}
