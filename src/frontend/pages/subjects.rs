//! Subject pages: list, create and edit.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::REDIRECT_DELAY_MS;
use crate::api::{scoped_abort_signal, use_client};
use crate::frontend::components::{use_toaster, SubmitButton, TextField};
use crate::frontend::state::FormState;
use crate::models::{find_by_id, remove_by_id, Subject, SubjectForm, SubjectFormErrors};
use crate::session::use_session;

/// Subject collection with row-level edit and delete.
#[component]
pub fn SubjectListPage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();

    let subjects = RwSignal::new(Vec::<Subject>::new());
    let loading = RwSignal::new(true);

    let abort = scoped_abort_signal();
    {
        let api = api.clone();
        spawn_local(async move {
            match api.list_subjects(abort.as_ref()).await {
                Ok(list) => {
                    subjects.try_set(list);
                }
                Err(err) if err.is_aborted() => return,
                Err(err) => {
                    leptos::logging::error!("failed to load subjects: {err}");
                    if err.is_unauthorized() {
                        session.log_out();
                    }
                }
            }
            loading.try_set(false);
        });
    }

    let delete = {
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_subject(&id).await {
                    Ok(()) => {
                        subjects.try_update(|list| remove_by_id(list, &id));
                    }
                    Err(err) => {
                        leptos::logging::error!("failed to delete subject {id}: {err}");
                        if err.is_unauthorized() {
                            session.log_out();
                        }
                        toaster.error(err.user_message());
                    }
                }
            });
        }
    };

    view! {
        <div>
            <h2 class="text-3xl font-bold text-white mb-6">"Subjects"</h2>
            <a
                href="/dashboard/materias/create"
                class="inline-block mb-6 px-4 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-500 transition-colors"
            >
                "New subject"
            </a>
            <div class="overflow-x-auto rounded-xl border border-slate-800">
                <table class="w-full text-sm text-left">
                    <thead class="bg-slate-900 text-slate-300">
                        <tr>
                            <th class="px-4 py-3">"Name"</th>
                            <th class="px-4 py-3">"Code"</th>
                            <th class="px-4 py-3">"Credits"</th>
                            <th class="px-4 py-3">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || subjects.get() key=|s| s.id.clone() children=move |subject: Subject| {
                            let delete = delete.clone();
                            let edit_href = format!("/dashboard/materias/edit/{}", subject.id);
                            let delete_id = subject.id.clone();
                            let credits = subject.credits.map(|c| c.to_string()).unwrap_or_default();
                            view! {
                                <tr class="border-t border-slate-800 hover:bg-slate-900/50">
                                    <td class="px-4 py-3">{subject.name}</td>
                                    <td class="px-4 py-3">{subject.code}</td>
                                    <td class="px-4 py-3">{credits}</td>
                                    <td class="px-4 py-3">
                                        <div class="flex gap-2">
                                            <a
                                                href=edit_href
                                                class="px-3 py-1 rounded-md bg-sky-600 text-white hover:bg-sky-500 transition-colors"
                                            >
                                                "Edit"
                                            </a>
                                            <button
                                                on:click=move |_| delete(delete_id.clone())
                                                class="px-3 py-1 rounded-md bg-red-600 text-white hover:bg-red-500 transition-colors"
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }/>
                        <Show when=move || subjects.with(Vec::is_empty)>
                            <tr>
                                <td colspan="4" class="px-4 py-6 text-center text-slate-500">
                                    {move || if loading.get() { "Loading subjects..." } else { "No subjects registered" }}
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Subject creation form.
#[component]
pub fn SubjectCreatePage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let credits = RwSignal::new(String::new());
    let errors = RwSignal::new(SubjectFormErrors::default());
    let state = RwSignal::new(FormState::Ready);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !state.get().can_submit() {
            return;
        }
        let form = SubjectForm {
            name: name.get(),
            code: code.get(),
            credits: credits.get(),
        };
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SubjectFormErrors::default());
        state.set(FormState::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.create_subject(&payload).await {
                Ok(_) => {
                    state.try_set(FormState::Saved);
                    toaster.success("Subject created");
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/dashboard/materias", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("failed to create subject: {err}");
                    if err.is_unauthorized() {
                        session.log_out();
                    }
                    toaster.error(err.user_message());
                    state.try_set(FormState::Ready);
                }
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <h2 class="text-3xl font-bold text-white mb-8 text-center">"New Subject"</h2>
            <form class="space-y-5" on:submit=submit>
                <SubjectFields name=name code=code credits=credits errors=errors/>
                <SubmitButton
                    label="Save subject"
                    busy_label="Saving..."
                    busy=Signal::derive(move || state.get().is_busy())
                    disabled=Signal::derive(move || !state.get().can_submit())
                />
            </form>
        </div>
    }
}

/// Subject edit form, located by scanning the fetched collection.
#[component]
pub fn SubjectEditPage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let credits = RwSignal::new(String::new());
    let errors = RwSignal::new(SubjectFormErrors::default());
    let state = RwSignal::new(FormState::Loading);

    let abort = scoped_abort_signal();
    {
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let id = params.get_untracked().get("id").unwrap_or_default();
            match api.list_subjects(abort.as_ref()).await {
                Ok(list) => match find_by_id(&list, &id) {
                    Some(subject) => {
                        let form = SubjectForm::from_record(subject);
                        name.try_set(form.name);
                        code.try_set(form.code);
                        credits.try_set(form.credits);
                        state.try_set(FormState::Ready);
                    }
                    None => {
                        state.try_set(FormState::NotFound);
                        toaster.error("Subject not found");
                        navigate("/dashboard/materias", Default::default());
                    }
                },
                Err(err) if err.is_aborted() => {}
                Err(err) => {
                    leptos::logging::error!("failed to load subject {id}: {err}");
                    if err.is_unauthorized() {
                        session.log_out();
                    }
                    toaster.error(err.user_message());
                }
            }
        });
    }

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !state.get().can_submit() {
            return;
        }
        let form = SubjectForm {
            name: name.get(),
            code: code.get(),
            credits: credits.get(),
        };
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SubjectFormErrors::default());
        state.set(FormState::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        let id = params.get_untracked().get("id").unwrap_or_default();
        spawn_local(async move {
            match api.update_subject(&id, &payload).await {
                Ok(_) => {
                    state.try_set(FormState::Saved);
                    toaster.success("Subject updated");
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/dashboard/materias", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("failed to update subject {id}: {err}");
                    if err.is_unauthorized() {
                        session.log_out();
                    }
                    toaster.error(err.user_message());
                    state.try_set(FormState::Ready);
                }
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <h2 class="text-3xl font-bold text-white mb-8 text-center">"Edit Subject"</h2>
            <p
                class="text-center text-slate-400 mt-8"
                class:hidden=move || !state.get().is_loading()
            >
                "Loading subject..."
            </p>
            <form class="space-y-5" class:hidden=move || state.get().is_loading() on:submit=submit>
                <SubjectFields name=name code=code credits=credits errors=errors/>
                <SubmitButton
                    label="Update subject"
                    busy_label="Updating..."
                    busy=Signal::derive(move || state.get().is_busy())
                    disabled=Signal::derive(move || !state.get().can_submit())
                />
            </form>
        </div>
    }
}

#[component]
fn SubjectFields(
    name: RwSignal<String>,
    code: RwSignal<String>,
    credits: RwSignal<String>,
    errors: RwSignal<SubjectFormErrors>,
) -> impl IntoView {
    view! {
        <TextField
            label="Name"
            name="nombre"
            placeholder="Subject name"
            value=name
            error=Signal::derive(move || errors.get().name)
        />
        <TextField
            label="Code"
            name="codigo"
            placeholder="Subject code"
            value=code
            error=Signal::derive(move || errors.get().code)
        />
        <TextField
            label="Credits"
            name="creditos"
            placeholder="Credits"
            value=credits
            error=Signal::derive(move || errors.get().credits)
        />
    }
}
