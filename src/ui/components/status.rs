use dioxus::prelude::*;

#[component]
pub fn Loading(message: String) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String, details: Option<String>) -> Element {
    rsx! {
        div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            p { "{message}" }
            if let Some(details) = details {
                p { class: "text-sm mt-2 text-red-200", "{details}" }
            }
        }
    }
}
