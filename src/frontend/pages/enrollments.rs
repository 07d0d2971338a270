//! Enrollment pages: list, create and edit.
//!
//! The create and edit forms cross-reference the student and subject
//! collections to populate their selects; the edit form additionally
//! locates its record by scanning the full enrollment collection.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::REDIRECT_DELAY_MS;
use crate::api::{scoped_abort_signal, use_client};
use crate::frontend::components::{use_toaster, SelectField, SubmitButton, TextField};
use crate::frontend::state::FormState;
use crate::models::{
    find_by_id, remove_by_id, Enrollment, EnrollmentFormErrors, EnrollmentPayload, Student, Subject,
};
use crate::session::use_session;

/// Enrollment collection, rendered from the embedded student and subject
/// summaries the list endpoint joins in.
#[component]
pub fn EnrollmentListPage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();

    let enrollments = RwSignal::new(Vec::<Enrollment>::new());
    let loading = RwSignal::new(true);

    let abort = scoped_abort_signal();
    {
        let api = api.clone();
        spawn_local(async move {
            match api.list_enrollments(abort.as_ref()).await {
                Ok(list) => {
                    enrollments.try_set(list);
                }
                Err(err) if err.is_aborted() => return,
                Err(err) => {
                    leptos::logging::error!("failed to load enrollments: {err}");
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
                match api.delete_enrollment(&id).await {
                    Ok(()) => {
                        enrollments.try_update(|list| remove_by_id(list, &id));
                    }
                    Err(err) => {
                        leptos::logging::error!("failed to delete enrollment {id}: {err}");
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
            <h2 class="text-3xl font-bold text-white mb-6">"Enrollments"</h2>
            <a
                href="/dashboard/matriculas/create"
                class="inline-block mb-6 px-4 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-500 transition-colors"
            >
                "New enrollment"
            </a>
            <div class="overflow-x-auto rounded-xl border border-slate-800">
                <table class="w-full text-sm text-left min-w-[900px]">
                    <thead class="bg-slate-900 text-slate-300">
                        <tr>
                            <th class="px-4 py-3">"Code"</th>
                            <th class="px-4 py-3">"Description"</th>
                            <th class="px-4 py-3">"Student"</th>
                            <th class="px-4 py-3">"National ID"</th>
                            <th class="px-4 py-3">"Email"</th>
                            <th class="px-4 py-3">"Subject"</th>
                            <th class="px-4 py-3">"Subject code"</th>
                            <th class="px-4 py-3">"Credits"</th>
                            <th class="px-4 py-3">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || enrollments.get() key=|e| e.id.clone() children=move |enrollment: Enrollment| {
                            let delete = delete.clone();
                            let edit_href = format!("/dashboard/matriculas/edit/{}", enrollment.id);
                            let delete_id = enrollment.id.clone();
                            view! {
                                <tr class="border-t border-slate-800 hover:bg-slate-900/50">
                                    <td class="px-4 py-3">{enrollment.code.clone()}</td>
                                    <td class="px-4 py-3">{enrollment.description.clone()}</td>
                                    <td class="px-4 py-3">{enrollment.student_name()}</td>
                                    <td class="px-4 py-3">{enrollment.student_national_id()}</td>
                                    <td class="px-4 py-3">{enrollment.student_email()}</td>
                                    <td class="px-4 py-3">{enrollment.subject_name()}</td>
                                    <td class="px-4 py-3">{enrollment.subject_code()}</td>
                                    <td class="px-4 py-3">{enrollment.subject_credits()}</td>
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
                        <Show when=move || enrollments.with(Vec::is_empty)>
                            <tr>
                                <td colspan="9" class="px-4 py-6 text-center text-slate-500">
                                    {move || if loading.get() { "Loading enrollments..." } else { "No enrollments registered" }}
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Enrollment creation form. Both reference collections load before the
/// form can be submitted.
#[component]
pub fn EnrollmentCreatePage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();
    let navigate = use_navigate();

    let students = RwSignal::new(Vec::<Student>::new());
    let subjects = RwSignal::new(Vec::<Subject>::new());
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let student_id = RwSignal::new(String::new());
    let subject_id = RwSignal::new(String::new());
    let errors = RwSignal::new(EnrollmentFormErrors::default());
    let state = RwSignal::new(FormState::Loading);

    let abort = scoped_abort_signal();
    {
        let api = api.clone();
        spawn_local(async move {
            let loaded = async {
                let student_list = api.list_students(abort.as_ref()).await?;
                let subject_list = api.list_subjects(abort.as_ref()).await?;
                Ok::<_, crate::api::ApiError>((student_list, subject_list))
            }
            .await;
            match loaded {
                Ok((student_list, subject_list)) => {
                    students.try_set(student_list);
                    subjects.try_set(subject_list);
                }
                Err(err) if err.is_aborted() => return,
                Err(err) => {
                    leptos::logging::error!("failed to load reference collections: {err}");
                    if err.is_unauthorized() {
                        session.log_out();
                    }
                    toaster.error("Could not load students or subjects");
                }
            }
            state.try_set(FormState::Ready);
        });
    }

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !state.get().can_submit() {
            return;
        }
        let payload = EnrollmentPayload {
            code: code.get(),
            description: description.get(),
            student_id: student_id.get(),
            subject_id: subject_id.get(),
        };
        let field_errors = payload.validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(EnrollmentFormErrors::default());
        state.set(FormState::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.create_enrollment(&payload).await {
                Ok(_) => {
                    state.try_set(FormState::Saved);
                    toaster.success("Enrollment created");
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/dashboard/matriculas", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("failed to create enrollment: {err}");
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
            <h2 class="text-3xl font-bold text-white mb-8 text-center">"New Enrollment"</h2>
            <form class="space-y-5" on:submit=submit>
                <EnrollmentFields
                    code=code
                    description=description
                    student_id=student_id
                    subject_id=subject_id
                    students=students
                    subjects=subjects
                    errors=errors
                />
                <SubmitButton
                    label="Save enrollment"
                    busy_label="Saving..."
                    busy=Signal::derive(move || state.get().is_busy())
                    disabled=Signal::derive(move || !state.get().can_submit())
                />
            </form>
        </div>
    }
}

/// Enrollment edit form.
///
/// Needs all three collections: students and subjects for the selects, the
/// enrollment list to locate the record being edited. An id missing from
/// the fetched collection is terminal and bounces back to the list.
#[component]
pub fn EnrollmentEditPage() -> impl IntoView {
    let api = use_client();
    let toaster = use_toaster();
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();

    let students = RwSignal::new(Vec::<Student>::new());
    let subjects = RwSignal::new(Vec::<Subject>::new());
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let student_id = RwSignal::new(String::new());
    let subject_id = RwSignal::new(String::new());
    let errors = RwSignal::new(EnrollmentFormErrors::default());
    let state = RwSignal::new(FormState::Loading);

    let abort = scoped_abort_signal();
    {
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let id = params.get_untracked().get("id").unwrap_or_default();
            let loaded = async {
                let student_list = api.list_students(abort.as_ref()).await?;
                let subject_list = api.list_subjects(abort.as_ref()).await?;
                let enrollment_list = api.list_enrollments(abort.as_ref()).await?;
                Ok::<_, crate::api::ApiError>((student_list, subject_list, enrollment_list))
            }
            .await;
            match loaded {
                Ok((student_list, subject_list, enrollment_list)) => {
                    match find_by_id(&enrollment_list, &id) {
                        Some(enrollment) => {
                            let form = EnrollmentPayload::from_record(enrollment);
                            students.try_set(student_list);
                            subjects.try_set(subject_list);
                            code.try_set(form.code);
                            description.try_set(form.description);
                            student_id.try_set(form.student_id);
                            subject_id.try_set(form.subject_id);
                            state.try_set(FormState::Ready);
                        }
                        None => {
                            state.try_set(FormState::NotFound);
                            toaster.error("Enrollment not found");
                            navigate("/dashboard/matriculas", Default::default());
                        }
                    }
                }
                Err(err) if err.is_aborted() => {}
                Err(err) => {
                    leptos::logging::error!("failed to load enrollment {id}: {err}");
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
        let payload = EnrollmentPayload {
            code: code.get(),
            description: description.get(),
            student_id: student_id.get(),
            subject_id: subject_id.get(),
        };
        let field_errors = payload.validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(EnrollmentFormErrors::default());
        state.set(FormState::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        let id = params.get_untracked().get("id").unwrap_or_default();
        spawn_local(async move {
            match api.update_enrollment(&id, &payload).await {
                Ok(_) => {
                    state.try_set(FormState::Saved);
                    toaster.success("Enrollment updated");
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/dashboard/matriculas", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("failed to update enrollment {id}: {err}");
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
            <h2 class="text-3xl font-bold text-white mb-8 text-center">"Edit Enrollment"</h2>
            <p
                class="text-center text-slate-400 mt-8"
                class:hidden=move || !state.get().is_loading()
            >
                "Loading enrollment..."
            </p>
            <form class="space-y-5" class:hidden=move || state.get().is_loading() on:submit=submit>
                <EnrollmentFields
                    code=code
                    description=description
                    student_id=student_id
                    subject_id=subject_id
                    students=students
                    subjects=subjects
                    errors=errors
                />
                <SubmitButton
                    label="Update enrollment"
                    busy_label="Updating..."
                    busy=Signal::derive(move || state.get().is_busy())
                    disabled=Signal::derive(move || !state.get().can_submit())
                />
            </form>
        </div>
    }
}

/// The field set shared by the create and edit forms: two text inputs and
/// the two reference selects.
#[component]
fn EnrollmentFields(
    code: RwSignal<String>,
    description: RwSignal<String>,
    student_id: RwSignal<String>,
    subject_id: RwSignal<String>,
    students: RwSignal<Vec<Student>>,
    subjects: RwSignal<Vec<Subject>>,
    errors: RwSignal<EnrollmentFormErrors>,
) -> impl IntoView {
    let student_options = Signal::derive(move || {
        students
            .get()
            .iter()
            .map(|s| (s.id.clone(), s.full_name()))
            .collect::<Vec<_>>()
    });
    let subject_options = Signal::derive(move || {
        subjects
            .get()
            .iter()
            .map(|s| (s.id.clone(), s.option_label()))
            .collect::<Vec<_>>()
    });

    view! {
        <TextField
            label="Code"
            name="codigo"
            placeholder="Enrollment code"
            value=code
            error=Signal::derive(move || errors.get().code)
        />
        <TextField
            label="Description"
            name="descripcion"
            placeholder="Enrollment description"
            value=description
            error=Signal::derive(move || errors.get().description)
        />
        <SelectField
            label="Student"
            name="estudianteId"
            prompt="Select a student"
            options=student_options
            value=student_id
            error=Signal::derive(move || errors.get().student_id)
        />
        <SelectField
            label="Subject"
            name="materiaId"
            prompt="Select a subject"
            options=subject_options
            value=subject_id
            error=Signal::derive(move || errors.get().subject_id)
        />
    }
}
