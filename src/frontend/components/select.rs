use leptos::prelude::*;

/// Labelled select populated from a reference collection.
///
/// Options are `(id, label)` pairs; the empty-valued prompt row keeps the
/// control meaningful before a choice is made and while options load.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] prompt: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <select
                id=name.clone()
                name=name
                on:change=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                       text-white focus:outline-none focus:ring-2 focus:ring-indigo-500
                       focus:border-transparent transition-all"
            >
                <option value="" selected=move || value.get().is_empty()>{prompt}</option>
                <For each=move || options.get() key=|(id, _)| id.clone() children=move |(id, label)| {
                    let selected_id = id.clone();
                    view! {
                        <option value=id selected=move || value.get() == selected_id>
                            {label}
                        </option>
                    }
                }/>
            </select>
            <Show when=move || error.get().is_some()>
                <p class="mt-1 text-xs text-red-400">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
