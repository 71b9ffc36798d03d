//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdHome;

use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "display: flex; flex-direction: column; width: 100%; height: 100%;",
            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    height: 56px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    color: white;
                ",
                Link {
                    to: Route::HomePage {},
                    class: "x-nav-link",
                    Icon { icon: MdHome, style: "width: 24px; height: 24px; color: white;" }
                    "Collections"
                }
            }
            div {
                id: "x-nav-content",
                style: "flex-grow: 1; overflow-y: auto;",
                Outlet::<Route> {}
            }
        }
    }
}
