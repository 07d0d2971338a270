use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::frontend::components::Sidebar;
use crate::session::use_session;

/// Guarded layout wrapping every administrative page.
///
/// A pure read of the session store at render time: with a token present
/// the requested page renders inside the admin chrome, otherwise the
/// visitor is redirected to the login page. No network involved.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <div class="flex">
                <Sidebar/>
                <section class="flex-1 p-8">
                    <Outlet/>
                </section>
            </div>
        </Show>
    }
}
