use dioxus::prelude::*;
use crate::components::ProfileView;

/// Landing page: no client selected yet
#[component]
pub fn Home() -> Element {
    rsx! {
        ProfileView { client_id: None }
    }
}
