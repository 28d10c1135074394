use dioxus::prelude::*;
use crate::components::ProfileView;

#[component]
pub fn Client(client_id: String) -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            ProfileView { client_id: Some(client_id) }
        }
    }
}
