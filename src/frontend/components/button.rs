use leptos::prelude::*;

/// Submit button that disables itself while a request is in flight.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || disabled.get() || busy.get()
            class="w-full inline-flex items-center justify-center px-6 py-3 font-semibold rounded-lg
                   bg-indigo-600 text-white hover:bg-indigo-500 transition-all
                   focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 focus:ring-offset-slate-950
                   disabled:opacity-50 disabled:cursor-not-allowed"
        >
            <Show when=move || busy.get() fallback=move || label.clone()>
                <span class="flex items-center justify-center gap-2">
                    <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                    {busy_label.clone()}
                </span>
            </Show>
        </button>
    }
}
