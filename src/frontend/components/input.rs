use leptos::prelude::*;

/// Labelled text input with an inline validation error underneath.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                       text-white placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent
                       transition-all"
            />
            <Show when=move || error.get().is_some()>
                <p class="mt-1 text-xs text-red-400">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
