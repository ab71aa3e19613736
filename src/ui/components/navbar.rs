use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component: top navigation, page content and footer
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "sticky top-0 z-40 bg-gray-900/95 border-b border-gray-800 backdrop-blur",
            div { class: "container mx-auto px-6 h-16 flex items-center justify-between",
                Link { to: Route::Home {}, class: "flex items-center gap-2 text-white font-bold text-xl",
                    span { class: "text-2xl", "🎧" }
                    "encore"
                }
                div { class: "flex items-center gap-6",
                    NavLink { to: Route::Home {}, label: "Home" }
                    NavLink { to: Route::Artists {}, label: "Artists" }
                    NavLink { to: Route::Musics {}, label: "Music" }
                    NavLink { to: Route::About {}, label: "About" }
                }
            }
        }
        main { class: "pb-16", Outlet::<Route> {} }
        footer { class: "border-t border-gray-800 py-8 text-center text-sm text-gray-500",
            p { "Discover independent artists and their music." }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    let current = use_route::<Route>();
    let active = current == to;
    let class = if active {
        "text-white font-medium"
    } else {
        "text-gray-400 hover:text-white transition-colors"
    };

    rsx! {
        Link { to, class: "{class}", "{label}" }
    }
}
