use crate::catalog::Artist;
use crate::listing::{ListStatus, PAGE_SIZE};
use crate::ui::components::artist_card::ArtistCard;
use crate::ui::components::listing_view::{
    CountBadge, EmptyState, PageHeader, PaginationBar, RetryPanel, SearchForm, SearchStatus,
    ARTISTS,
};
use crate::ui::components::Loading;
use crate::ui::{use_catalog_client, use_listing};
use dioxus::prelude::*;
use tracing::debug;

/// Searchable, paginated artist directory
#[component]
pub fn Artists() -> Element {
    debug!("Component rendering");
    let client = use_catalog_client();
    let listing = use_listing::<Artist, _>(client, PAGE_SIZE);
    let view = listing.view();
    let loading_message = if view.searching {
        "Searching artists..."
    } else {
        "Loading artists..."
    };

    rsx! {
        div { class: "container mx-auto p-6",
            PageHeader {
                title: "Discover Artists",
                subtitle: "Find independent artists and explore their music.",
            }

            div { class: "flex flex-col md:flex-row gap-4 items-start md:items-center justify-between mb-8",
                div { class: "flex-1 w-full",
                    SearchForm {
                        value: view.raw_term.clone(),
                        placeholder: "Search artists by name...",
                        on_input: move |text: String| listing.input(text),
                        on_submit: move |_| listing.submit(),
                        on_clear: move |_| listing.clear(),
                    }
                    if view.searching {
                        SearchStatus {
                            term: view.search_term.clone(),
                            total: view.total,
                            counting: view.counting,
                            noun: ARTISTS,
                        }
                    }
                }
                CountBadge {
                    total: view.total,
                    counting: view.counting,
                    searching: view.searching,
                    noun: ARTISTS,
                }
            }

            match &view.status {
                ListStatus::Idle => rsx! {},
                ListStatus::Loading => rsx! {
                    Loading { message: "{loading_message}" }
                },
                ListStatus::Failed(message) => rsx! {
                    RetryPanel {
                        title: "Couldn't load artists",
                        message: "{message}",
                        on_retry: move |_| listing.refetch(),
                    }
                },
                ListStatus::Loaded if view.items.is_empty() && view.searching => rsx! {
                    EmptyState {
                        icon: "🔍",
                        title: "No artists found",
                        message: "Nothing matches \"{view.search_term}\". Try a different name.",
                        on_clear: move |_| listing.clear(),
                    }
                },
                ListStatus::Loaded if view.items.is_empty() => rsx! {
                    EmptyState {
                        icon: "🎤",
                        title: "No artists yet",
                        message: "Artists will show up here once they join.",
                    }
                },
                ListStatus::Loaded => rsx! {
                    div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                        for artist in view.items.iter() {
                            ArtistCard { key: "{artist.id}", artist: artist.clone() }
                        }
                    }
                    if view.total_pages > 1 {
                        PaginationBar {
                            shown: view.items.len(),
                            total: view.total,
                            page: view.page,
                            total_pages: view.total_pages,
                            can_previous: view.can_previous,
                            can_next: view.can_next,
                            noun: ARTISTS,
                            on_previous: move |_| listing.previous_page(),
                            on_next: move |_| listing.next_page(),
                        }
                    }
                },
            }
        }
    }
}
