//! Building blocks shared by the searchable listing pages

use crate::ui::format::pluralize;
use dioxus::prelude::*;

/// What a listing holds, for labels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Noun {
    pub singular: &'static str,
    pub plural: &'static str,
}

pub const ARTISTS: Noun = Noun {
    singular: "artist",
    plural: "artists",
};

pub const TRACKS: Noun = Noun {
    singular: "track",
    plural: "tracks",
};

#[component]
pub fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "mb-8",
            h1 { class: "text-3xl font-bold text-white mb-2", "{title}" }
            p { class: "text-gray-400", "{subtitle}" }
        }
    }
}

/// Search box. Typing is reported on every keystroke, the form submits on Enter.
#[component]
pub fn SearchForm(
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "relative w-full max-w-xl",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-500", "🔍" }
            input {
                r#type: "text",
                class: "w-full bg-gray-800 border border-gray-700 rounded-lg pl-10 pr-10 py-2 text-white placeholder-gray-500 focus:outline-none focus:border-blue-500",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            if !value.is_empty() {
                button {
                    r#type: "button",
                    class: "absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-white",
                    title: "Clear search",
                    onclick: move |_| on_clear.call(()),
                    "✕"
                }
            }
        }
    }
}

/// Line under the search box while a search is active
#[component]
pub fn SearchStatus(term: String, total: Option<u64>, counting: bool, noun: Noun) -> Element {
    let summary = match total {
        _ if counting => "…".to_string(),
        Some(total) => format!(" · {} found", pluralize(total, noun.singular, noun.plural)),
        None => String::new(),
    };

    rsx! {
        p { class: "mt-2 text-sm text-gray-400",
            "Searching for "
            span { class: "text-white", "\"{term}\"" }
            "{summary}"
        }
    }
}

#[component]
pub fn CountBadge(total: Option<u64>, counting: bool, searching: bool, noun: Noun) -> Element {
    let label = match total {
        _ if counting => "Counting…".to_string(),
        Some(total) if searching => pluralize(total, "result", "results"),
        Some(total) => format!("{} total", pluralize(total, noun.singular, noun.plural)),
        None => String::new(),
    };

    rsx! {
        if !label.is_empty() {
            span { class: "inline-block bg-gray-800 border border-gray-700 text-gray-300 text-sm px-3 py-1 rounded-full whitespace-nowrap",
                "{label}"
            }
        }
    }
}

/// Previous/next controls. Only rendered by callers when there is more than one page.
#[component]
pub fn PaginationBar(
    shown: usize,
    total: Option<u64>,
    page: u32,
    total_pages: u32,
    can_previous: bool,
    can_next: bool,
    noun: Noun,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let page = page.min(total_pages.max(1));
    let button_class = "bg-gray-800 hover:bg-gray-700 disabled:opacity-40 disabled:cursor-not-allowed text-white px-4 py-2 rounded";

    rsx! {
        div { class: "mt-8 flex flex-col sm:flex-row items-center justify-between gap-4",
            p { class: "text-sm text-gray-400",
                if let Some(total) = total {
                    "Showing {shown} of {total} {noun.plural}"
                } else {
                    "Showing {shown} {noun.plural}"
                }
            }
            div { class: "flex items-center gap-4",
                button {
                    class: button_class,
                    disabled: !can_previous,
                    onclick: move |_| on_previous.call(()),
                    "← Previous"
                }
                span { class: "text-gray-300 text-sm", "Page {page} of {total_pages}" }
                button {
                    class: button_class,
                    disabled: !can_next,
                    onclick: move |_| on_next.call(()),
                    "Next →"
                }
            }
        }
    }
}

#[component]
pub fn RetryPanel(title: String, message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-red-400 text-5xl mb-4", "⚠" }
            h2 { class: "text-xl font-bold text-gray-200 mb-2", "{title}" }
            p { class: "text-gray-400 mb-6", "{message}" }
            button {
                class: "bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded",
                onclick: move |_| on_retry.call(()),
                "Try Again"
            }
        }
    }
}

/// Shown when a loaded page has no items. With `on_clear` set it offers to
/// leave the search that produced nothing.
#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    message: String,
    on_clear: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-gray-400 text-6xl mb-4", "{icon}" }
            h2 { class: "text-2xl font-bold text-gray-300 mb-2", "{title}" }
            p { class: "text-gray-500 mb-4", "{message}" }
            if let Some(on_clear) = on_clear {
                button {
                    class: "bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded",
                    onclick: move |_| on_clear.call(()),
                    "Clear Search"
                }
            }
        }
    }
}
