use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

/// Dashboard sidebar: module links, current user and logout.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let log_out = move |_| {
        session.log_out();
        navigate("/login", Default::default());
    };

    let link_classes = "px-3 py-2 rounded-lg text-slate-300 hover:text-white hover:bg-slate-800/70 transition-colors";

    view! {
        <aside class="w-64 min-h-screen bg-slate-900 border-r border-slate-800 p-6 flex flex-col">
            <a href="/dashboard" class="text-xl font-bold text-white mb-8">
                "Academic Records"
            </a>
            <nav class="flex flex-col gap-1 flex-1">
                <a href="/dashboard/estudiantes" class=link_classes>"Students"</a>
                <a href="/dashboard/materias" class=link_classes>"Subjects"</a>
                <a href="/dashboard/matriculas" class=link_classes>"Enrollments"</a>
            </nav>
            <div class="border-t border-slate-800 pt-4">
                <p class="text-sm text-slate-400 truncate mb-3">{move || session.user_name()}</p>
                <button
                    on:click=log_out
                    class="w-full px-3 py-2 rounded-lg border border-slate-700 text-slate-300
                           hover:border-slate-500 hover:text-white transition-colors"
                >
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
