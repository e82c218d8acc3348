//! Not found page component
//!
//! Rendered by the router fallback for every path other than `/`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::content::BRAND;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=format!("Page Not Found - {BRAND}") />

        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-black to-gray-800 text-gray-100 flex flex-col items-center justify-center p-4">
            <div class="backdrop-blur-xl bg-black/30 rounded-2xl p-12 border border-gray-800 text-center">
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>
                <p class="text-gray-300 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <A
                    href="/"
                    attr:class="inline-block px-6 py-3 bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white font-medium rounded-md transition-all"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
