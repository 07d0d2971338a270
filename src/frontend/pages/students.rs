//! Student pages: list, create and edit.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::REDIRECT_DELAY_MS;
use crate::api::{scoped_abort_signal, use_client};
use crate::frontend::components::{use_toaster, SubmitButton, TextField};
use crate::frontend::state::FormState;
use crate::models::{date_input_value, find_by_id, remove_by_id, Student, StudentFormErrors, StudentPayload};
use crate::session::use_session;

/// Student collection with row-level edit and delete.
#[component]
pub fn StudentListPage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();

    let students = RwSignal::new(Vec::<Student>::new());
    let loading = RwSignal::new(true);

    let abort = scoped_abort_signal();
    {
        let api = api.clone();
        spawn_local(async move {
            match api.list_students(abort.as_ref()).await {
                Ok(list) => {
                    students.try_set(list);
                }
                Err(err) if err.is_aborted() => return,
                Err(err) => {
                    leptos::logging::error!("failed to load students: {err}");
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
                match api.delete_student(&id).await {
                    Ok(()) => {
                        students.try_update(|list| remove_by_id(list, &id));
                    }
                    Err(err) => {
                        leptos::logging::error!("failed to delete student {id}: {err}");
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
            <h2 class="text-3xl font-bold text-white mb-6">"Students"</h2>
            <a
                href="/dashboard/estudiantes/create"
                class="inline-block mb-6 px-4 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-500 transition-colors"
            >
                "New student"
            </a>
            <div class="overflow-x-auto rounded-xl border border-slate-800">
                <table class="w-full text-sm text-left">
                    <thead class="bg-slate-900 text-slate-300">
                        <tr>
                            <th class="px-4 py-3">"First name"</th>
                            <th class="px-4 py-3">"Last name"</th>
                            <th class="px-4 py-3">"Birth date"</th>
                            <th class="px-4 py-3">"National ID"</th>
                            <th class="px-4 py-3">"City"</th>
                            <th class="px-4 py-3">"Phone"</th>
                            <th class="px-4 py-3">"Email"</th>
                            <th class="px-4 py-3">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || students.get() key=|s| s.id.clone() children=move |student: Student| {
                            let delete = delete.clone();
                            let edit_href = format!("/dashboard/estudiantes/edit/{}", student.id);
                            let delete_id = student.id.clone();
                            let birth = student
                                .birth_date
                                .as_deref()
                                .map(date_input_value)
                                .unwrap_or_default();
                            view! {
                                <tr class="border-t border-slate-800 hover:bg-slate-900/50">
                                    <td class="px-4 py-3">{student.first_name}</td>
                                    <td class="px-4 py-3">{student.last_name}</td>
                                    <td class="px-4 py-3">{birth}</td>
                                    <td class="px-4 py-3">{student.national_id.unwrap_or_default()}</td>
                                    <td class="px-4 py-3">{student.city.unwrap_or_default()}</td>
                                    <td class="px-4 py-3">{student.phone.unwrap_or_default()}</td>
                                    <td class="px-4 py-3">{student.email.unwrap_or_default()}</td>
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
                        <Show when=move || students.with(Vec::is_empty)>
                            <tr>
                                <td colspan="8" class="px-4 py-6 text-center text-slate-500">
                                    {move || if loading.get() { "Loading students..." } else { "No students registered" }}
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Student creation form.
#[component]
pub fn StudentCreatePage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let national_id = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(StudentFormErrors::default());
    let state = RwSignal::new(FormState::Ready);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !state.get().can_submit() {
            return;
        }
        let payload = StudentPayload {
            first_name: first_name.get(),
            last_name: last_name.get(),
            birth_date: birth_date.get(),
            national_id: national_id.get(),
            city: city.get(),
            address: address.get(),
            phone: phone.get(),
            email: email.get(),
        };
        let field_errors = payload.validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(StudentFormErrors::default());
        state.set(FormState::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.create_student(&payload).await {
                Ok(_) => {
                    state.try_set(FormState::Saved);
                    toaster.success("Student created");
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/dashboard/estudiantes", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("failed to create student: {err}");
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
            <h2 class="text-3xl font-bold text-white mb-8 text-center">"New Student"</h2>
            <form class="space-y-5" on:submit=submit>
                <StudentFields
                    first_name=first_name
                    last_name=last_name
                    birth_date=birth_date
                    national_id=national_id
                    city=city
                    address=address
                    phone=phone
                    email=email
                    errors=errors
                />
                <SubmitButton
                    label="Save student"
                    busy_label="Saving..."
                    busy=Signal::derive(move || state.get().is_busy())
                    disabled=Signal::derive(move || !state.get().can_submit())
                />
            </form>
        </div>
    }
}

/// Student edit form. The record is located by scanning the full
/// collection; an unknown id bounces straight back to the list.
#[component]
pub fn StudentEditPage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let national_id = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(StudentFormErrors::default());
    let state = RwSignal::new(FormState::Loading);

    let abort = scoped_abort_signal();
    {
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let id = params.get_untracked().get("id").unwrap_or_default();
            match api.list_students(abort.as_ref()).await {
                Ok(list) => match find_by_id(&list, &id) {
                    Some(student) => {
                        let form = StudentPayload::from_record(student);
                        first_name.try_set(form.first_name);
                        last_name.try_set(form.last_name);
                        birth_date.try_set(form.birth_date);
                        national_id.try_set(form.national_id);
                        city.try_set(form.city);
                        address.try_set(form.address);
                        phone.try_set(form.phone);
                        email.try_set(form.email);
                        state.try_set(FormState::Ready);
                    }
                    None => {
                        state.try_set(FormState::NotFound);
                        toaster.error("Student not found");
                        navigate("/dashboard/estudiantes", Default::default());
                    }
                },
                Err(err) if err.is_aborted() => {}
                Err(err) => {
                    leptos::logging::error!("failed to load student {id}: {err}");
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
        let payload = StudentPayload {
            first_name: first_name.get(),
            last_name: last_name.get(),
            birth_date: birth_date.get(),
            national_id: national_id.get(),
            city: city.get(),
            address: address.get(),
            phone: phone.get(),
            email: email.get(),
        };
        let field_errors = payload.validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(StudentFormErrors::default());
        state.set(FormState::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        let id = params.get_untracked().get("id").unwrap_or_default();
        spawn_local(async move {
            match api.update_student(&id, &payload).await {
                Ok(_) => {
                    state.try_set(FormState::Saved);
                    toaster.success("Student updated");
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/dashboard/estudiantes", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("failed to update student {id}: {err}");
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
            <h2 class="text-3xl font-bold text-white mb-8 text-center">"Edit Student"</h2>
            <p
                class="text-center text-slate-400 mt-8"
                class:hidden=move || !state.get().is_loading()
            >
                "Loading student..."
            </p>
            <form class="space-y-5" class:hidden=move || state.get().is_loading() on:submit=submit>
                <StudentFields
                    first_name=first_name
                    last_name=last_name
                    birth_date=birth_date
                    national_id=national_id
                    city=city
                    address=address
                    phone=phone
                    email=email
                    errors=errors
                />
                <SubmitButton
                    label="Update student"
                    busy_label="Updating..."
                    busy=Signal::derive(move || state.get().is_busy())
                    disabled=Signal::derive(move || !state.get().can_submit())
                />
            </form>
        </div>
    }
}

/// The field set shared by the create and edit forms.
#[component]
fn StudentFields(
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    birth_date: RwSignal<String>,
    national_id: RwSignal<String>,
    city: RwSignal<String>,
    address: RwSignal<String>,
    phone: RwSignal<String>,
    email: RwSignal<String>,
    errors: RwSignal<StudentFormErrors>,
) -> impl IntoView {
    view! {
        <TextField
            label="First name"
            name="nombre"
            placeholder="First name"
            value=first_name
            error=Signal::derive(move || errors.get().first_name)
        />
        <TextField
            label="Last name"
            name="apellido"
            placeholder="Last name"
            value=last_name
            error=Signal::derive(move || errors.get().last_name)
        />
        <TextField
            label="Birth date"
            name="fecha_nacimiento"
            input_type="date"
            value=birth_date
            error=Signal::derive(move || errors.get().birth_date)
        />
        <TextField
            label="National ID"
            name="cedula"
            placeholder="National ID"
            value=national_id
            error=Signal::derive(move || None::<String>)
        />
        <TextField
            label="City"
            name="ciudad"
            placeholder="City"
            value=city
            error=Signal::derive(move || None::<String>)
        />
        <TextField
            label="Address"
            name="direccion"
            placeholder="Address"
            value=address
            error=Signal::derive(move || None::<String>)
        />
        <TextField
            label="Phone"
            name="telefono"
            placeholder="Phone"
            value=phone
            error=Signal::derive(move || None::<String>)
        />
        <TextField
            label="Email"
            name="email"
            placeholder="Email"
            input_type="email"
            value=email
            error=Signal::derive(move || None::<String>)
        />
    }
}
