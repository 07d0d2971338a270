//! Login page: obtains the bearer token that unlocks the dashboard.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::api::{Client, LoginRequest};
use crate::frontend::components::{use_toaster, SubmitButton, TextField};
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    // Public-only route: an authenticated visitor goes straight in.
    if session.is_authenticated() {
        return view! { <Redirect path="/dashboard"/> }.into_any();
    }

    let toaster = use_toaster();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        email_error.set(
            email
                .with(|v| v.trim().is_empty())
                .then(|| "Email is required".to_string()),
        );
        password_error.set(
            password
                .with(|v| v.is_empty())
                .then(|| "Password is required".to_string()),
        );
        if email_error.with(Option::is_some) || password_error.with(Option::is_some) {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let credentials = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match Client::anonymous().login(&credentials).await {
                Ok(response) => {
                    let name = response.display_name(&credentials.email);
                    session.log_in(response.token, name);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("login failed: {err}");
                    toaster.error(err.user_message());
                    submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12">
            <div class="w-full max-w-md bg-slate-900/80 border border-slate-800 rounded-2xl p-8 shadow-xl">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-white">"Academic Records"</h1>
                    <p class="text-slate-400 mt-2">"Sign in to manage enrollments"</p>
                </div>
                <form class="space-y-5" on:submit=submit>
                    <TextField
                        label="Email"
                        name="email"
                        placeholder="you@example.com"
                        input_type="email"
                        value=email
                        error=email_error
                    />
                    <TextField
                        label="Password"
                        name="password"
                        placeholder="••••••••"
                        input_type="password"
                        value=password
                        error=password_error
                    />
                    <SubmitButton
                        label="Sign in"
                        busy_label="Signing in..."
                        busy=submitting
                        disabled=Signal::derive(|| false)
                    />
                </form>
            </div>
        </div>
    }
    .into_any()
}
