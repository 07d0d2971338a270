//! Reactive session store shared by every page.
//!
//! The bearer token and display name live in one signal provided at the
//! application root and mirrored into `localStorage`, so a page reload does
//! not force a re-login. The only mutation entry points are [`Session::log_in`]
//! and [`Session::log_out`].

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "matriculas.session";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SessionData {
    token: String,
    user_name: String,
}

/// Handle to the process-wide session state. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<Option<SessionData>>,
}

impl Session {
    fn load() -> Self {
        let stored = LocalStorage::get::<SessionData>(STORAGE_KEY).ok();
        Self {
            state: RwSignal::new(stored),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.as_ref().map(|data| data.token.clone()))
    }

    pub fn user_name(&self) -> String {
        self.state
            .with(|s| s.as_ref().map(|data| data.user_name.clone()).unwrap_or_default())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_some())
    }

    pub fn log_in(&self, token: String, user_name: String) {
        let data = SessionData { token, user_name };
        if let Err(err) = LocalStorage::set(STORAGE_KEY, &data) {
            leptos::logging::warn!("session not persisted: {err}");
        }
        self.state.set(Some(data));
    }

    /// Ends the session. Also invoked when the API answers 401, at which
    /// point the route guard bounces the user back to the login page.
    pub fn log_out(&self) {
        LocalStorage::delete(STORAGE_KEY);
        self.state.try_set(None);
    }
}

/// Installs the session store at the application root.
pub fn provide_session() {
    provide_context(Session::load());
}

/// The session installed by [`provide_session`].
pub fn use_session() -> Session {
    expect_context::<Session>()
}
