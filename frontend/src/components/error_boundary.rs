//! Error boundaries for the storefront pages.

use dioxus::prelude::*;

/// Outermost boundary; a failed catalog request ends up here.
#[component]
pub fn GlobalErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        class: "x-page",
                        h1 { "Something went wrong" }
                        p { "The store could not be reached. Please try again in a moment." }
                        a { href: "/", "Back to all collections" }
                        pre { class: "x-error-box", "{err:#?}" }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-button",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            pre { class: "x-error-box", "{error_txt}" }
            {children}
        }
    }
}
