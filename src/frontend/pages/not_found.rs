//! Catch-all page for unmatched routes.

use leptos::prelude::*;

/// 404 page. No state, no network, one way back home.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6">
            <div class="text-center">
                <h1 class="text-8xl font-bold text-indigo-400 mb-4">"404"</h1>
                <p class="text-2xl font-semibold text-white mb-2">"Page not found"</p>
                <p class="text-slate-400 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a
                    href="/dashboard"
                    class="inline-block px-6 py-3 rounded-lg bg-indigo-600 text-white hover:bg-indigo-500 transition-colors"
                >
                    "Return home"
                </a>
            </div>
        </div>
    }
}
