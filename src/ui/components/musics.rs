use crate::catalog::Music;
use crate::listing::{ListStatus, PAGE_SIZE};
use crate::ui::components::music_card::MusicCard;
use crate::ui::components::listing_view::{
    CountBadge, EmptyState, PageHeader, PaginationBar, RetryPanel, SearchForm, SearchStatus,
    TRACKS,
};
use crate::ui::components::Loading;
use crate::ui::{use_catalog_client, use_listing};
use dioxus::prelude::*;
use tracing::debug;

/// Searchable, paginated track catalog
#[component]
pub fn Musics() -> Element {
    debug!("Component rendering");
    let client = use_catalog_client();
    let listing = use_listing::<Music, _>(client, PAGE_SIZE);
    let view = listing.view();
    let loading_message = if view.searching {
        "Searching tracks..."
    } else {
        "Loading tracks..."
    };

    rsx! {
        div { class: "container mx-auto p-6",
            PageHeader {
                title: "Discover Music",
                subtitle: "Listen to the latest tracks from independent artists.",
            }

            div { class: "flex flex-col md:flex-row gap-4 items-start md:items-center justify-between mb-8",
                div { class: "flex-1 w-full",
                    SearchForm {
                        value: view.raw_term.clone(),
                        placeholder: "Search tracks by title...",
                        on_input: move |text: String| listing.input(text),
                        on_submit: move |_| listing.submit(),
                        on_clear: move |_| listing.clear(),
                    }
                    if view.searching {
                        SearchStatus {
                            term: view.search_term.clone(),
                            total: view.total,
                            counting: view.counting,
                            noun: TRACKS,
                        }
                    }
                }
                CountBadge {
                    total: view.total,
                    counting: view.counting,
                    searching: view.searching,
                    noun: TRACKS,
                }
            }

            match &view.status {
                ListStatus::Idle => rsx! {},
                ListStatus::Loading => rsx! {
                    Loading { message: "{loading_message}" }
                },
                ListStatus::Failed(message) => rsx! {
                    RetryPanel {
                        title: "Couldn't load tracks",
                        message: "{message}",
                        on_retry: move |_| listing.refetch(),
                    }
                },
                ListStatus::Loaded if view.items.is_empty() && view.searching => rsx! {
                    EmptyState {
                        icon: "🔍",
                        title: "No tracks found",
                        message: "Nothing matches \"{view.search_term}\". Try a different title.",
                        on_clear: move |_| listing.clear(),
                    }
                },
                ListStatus::Loaded if view.items.is_empty() => rsx! {
                    EmptyState {
                        icon: "🎵",
                        title: "No tracks yet",
                        message: "Tracks will show up here once artists publish them.",
                    }
                },
                ListStatus::Loaded => rsx! {
                    div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                        for music in view.items.iter() {
                            MusicCard { key: "{music.id}", music: music.clone() }
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
                            noun: TRACKS,
                            on_previous: move |_| listing.previous_page(),
                            on_next: move |_| listing.next_page(),
                        }
                    }
                },
            }
        }
    }
}
