use crate::catalog::{ArtistMusics, ArtistProfile, Music};
use crate::listing::{ListStatus, ARTIST_TRACKS_PAGE_SIZE};
use crate::ui::components::listing_view::{CountBadge, PaginationBar, RetryPanel, TRACKS};
use crate::ui::components::Loading;
use crate::ui::format::{format_date, initial};
use crate::ui::{use_catalog_client, use_listing, Route};
use dioxus::prelude::*;
use tracing::debug;

/// Artist profile page with the artist's tracks
#[component]
pub fn ArtistDetail(slug: ReadSignal<String>) -> Element {
    let client = use_catalog_client();
    let profile = use_resource(move || {
        let client = client.clone();
        let slug = slug();
        async move {
            debug!("Loading artist {}", slug);
            client.artist_by_slug(&slug).await
        }
    });

    rsx! {
        div { class: "container mx-auto p-6",
            Link {
                to: Route::Artists {},
                class: "inline-block text-gray-400 hover:text-white mb-6",
                "← Back to Artists"
            }
            match profile.read().as_ref() {
                None => rsx! {
                    Loading { message: "Loading artist..." }
                },
                Some(Err(e)) => rsx! {
                    ArtistMissing { details: Some(e.to_string()) }
                },
                Some(Ok(None)) => rsx! {
                    ArtistMissing { details: None }
                },
                Some(Ok(Some(profile))) => rsx! {
                    ArtistHeader { profile: profile.clone() }
                    ArtistTracks {
                        key: "{profile.artist.id}",
                        artist_id: profile.artist.id.clone(),
                    }
                },
            }
        }
    }
}

#[component]
fn ArtistMissing(details: Option<String>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-gray-400 text-6xl mb-4", "🎤" }
            h2 { class: "text-2xl font-bold text-gray-300 mb-2", "Artist not found" }
            p { class: "text-gray-500 mb-4",
                "The artist you're looking for doesn't exist or has been removed."
            }
            if let Some(details) = details {
                p { class: "text-sm text-red-300 mb-4", "{details}" }
            }
            Link {
                to: Route::Artists {},
                class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded",
                "Browse Artists"
            }
        }
    }
}

#[component]
fn ArtistHeader(profile: ArtistProfile) -> Element {
    let artist = &profile.artist;
    let joined = artist.created_at.as_deref().and_then(format_date);

    rsx! {
        div { class: "flex flex-col md:flex-row gap-8 items-start mb-10",
            div { class: "w-48 h-48 flex-shrink-0 rounded-full overflow-hidden bg-gray-700 flex items-center justify-center",
                if let Some(image) = &artist.image {
                    img {
                        src: "{image}",
                        alt: "Photo of {artist.name}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    span { class: "text-6xl font-bold text-white", "{initial(&artist.name)}" }
                }
            }
            div { class: "flex-1",
                h1 { class: "text-4xl font-bold text-white mb-3", "{artist.name}" }
                div { class: "flex flex-wrap gap-3 text-sm text-gray-400 mb-4",
                    if let Some(genre) = &profile.genre {
                        span { class: "bg-gray-800 px-3 py-1 rounded-full", "{genre}" }
                    }
                    if let Some(location) = &profile.location {
                        span { "📍 {location}" }
                    }
                    if let Some(joined) = joined {
                        span { "Joined {joined}" }
                    }
                }
                if let Some(description) = &artist.description {
                    p { class: "text-gray-300 whitespace-pre-line", "{description}" }
                }
                if let Some(website) = &profile.website {
                    a {
                        href: "{website}",
                        target: "_blank",
                        class: "inline-block mt-4 text-blue-400 hover:text-blue-300",
                        "{website}"
                    }
                }
            }
        }
    }
}

/// Paged track list for one artist, newest first
#[component]
fn ArtistTracks(artist_id: String) -> Element {
    let client = use_catalog_client();
    let listing = use_listing::<Music, _>(
        ArtistMusics::new(client, artist_id),
        ARTIST_TRACKS_PAGE_SIZE,
    );
    let view = listing.view();

    rsx! {
        section {
            div { class: "flex items-center justify-between mb-4",
                h2 { class: "text-2xl font-bold text-white", "Tracks" }
                CountBadge {
                    total: view.total,
                    counting: view.counting,
                    searching: false,
                    noun: TRACKS,
                }
            }
            match &view.status {
                ListStatus::Idle => rsx! {},
                ListStatus::Loading => rsx! {
                    Loading { message: "Loading tracks..." }
                },
                ListStatus::Failed(message) => rsx! {
                    RetryPanel {
                        title: "Couldn't load tracks",
                        message: "{message}",
                        on_retry: move |_| listing.refetch(),
                    }
                },
                ListStatus::Loaded if view.items.is_empty() => rsx! {
                    p { class: "text-gray-500 py-6", "This artist hasn't published any tracks yet." }
                },
                ListStatus::Loaded => rsx! {
                    div { class: "bg-gray-800 rounded-lg divide-y divide-gray-700",
                        for (index, music) in view.items.iter().enumerate() {
                            TrackRow {
                                key: "{music.id}",
                                position: (view.page.saturating_sub(1) * ARTIST_TRACKS_PAGE_SIZE) as usize + index + 1,
                                music: music.clone(),
                            }
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

#[component]
fn TrackRow(position: usize, music: Music) -> Element {
    let released = music.created_at.as_deref().and_then(format_date);

    rsx! {
        Link {
            to: Route::MusicDetail { slug: music.slug.clone() },
            class: "flex items-center gap-4 px-4 py-3 hover:bg-gray-700 transition-colors",
            span { class: "w-8 text-right text-gray-500", "{position}" }
            div { class: "w-10 h-10 rounded bg-gray-700 overflow-hidden flex items-center justify-center",
                if let Some(image) = &music.image {
                    img { src: "{image}", class: "w-full h-full object-cover" }
                } else {
                    span { class: "text-gray-400", "🎵" }
                }
            }
            span { class: "flex-1 text-white truncate", "{music.name}" }
            if let Some(released) = released {
                span { class: "text-gray-500 text-sm", "{released}" }
            }
        }
    }
}
