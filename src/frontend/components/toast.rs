//! Transient toast notifications, rendered from a context-provided queue.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq)]
enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Handle for pushing notifications from any page.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    counter: StoredValue<u64>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        self.counter.update_value(|c| *c += 1);
        let id = self.counter.get_value();
        if self
            .toasts
            .try_update(|list| list.push(Toast { id, kind, message }))
            .is_none()
        {
            return;
        }
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.try_update(|list| list.retain(|toast| toast.id != id));
        });
    }
}

/// Installs the toast queue at the application root.
pub fn provide_toaster() {
    provide_context(Toaster {
        toasts: RwSignal::new(Vec::new()),
        counter: StoredValue::new(0),
    });
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Fixed-position container rendering the live queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For each=move || toaster.toasts.get() key=|toast| toast.id children=|toast| {
                let (icon, classes) = match toast.kind {
                    ToastKind::Success => ("✓", "border-emerald-500/30 text-emerald-400"),
                    ToastKind::Error => ("✕", "border-red-500/30 text-red-400"),
                };
                view! {
                    <div class=format!("p-4 rounded-lg border text-sm shadow-lg bg-slate-900 {classes}")>
                        <p class="flex items-center gap-2">
                            <span>{icon}</span>
                            <span>{toast.message}</span>
                        </p>
                    </div>
                }
            }/>
        </div>
    }
}
