use crate::ui::{Route, MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900 text-gray-100", Router::<Route> {} }
    }
}
