use dioxus::prelude::*;

pub mod home;
pub mod client;

use home::Home;
use client::Client;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/clients/:client_id")]
        Client { client_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",

            header {
                class: "sticky top-0 z-10 bg-background/80 backdrop-blur-sm border-b border-border",
                div {
                    class: "flex items-center gap-4 p-4",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold",
                        "Akesomind"
                    }
                }
            }

            main {
                class: "max-w-2xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}
