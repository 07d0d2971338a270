use leptos::prelude::*;

/// Dashboard landing panel. Static, the side panel does the navigating.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center text-center h-[80vh] gap-4">
            <h1 class="text-5xl font-bold text-white">"Academic Records"</h1>
            <h2 class="text-2xl font-semibold text-slate-300">"Student Management"</h2>
            <p class="max-w-xl text-slate-400 leading-relaxed">
                "Manage students, subjects and enrollments from the side panel. Every module supports creating, editing and deleting records."
            </p>
        </div>
    }
}
