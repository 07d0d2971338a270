//! Application shell: router, guards and the page tree.

pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::session::provide_session;
use components::{provide_toaster, ToastHost};
use pages::{
    DashboardLayout, EnrollmentCreatePage, EnrollmentEditPage, EnrollmentListPage, HomePage,
    LoginPage, NotFoundPage, StudentCreatePage, StudentEditPage, StudentListPage,
    SubjectCreatePage, SubjectEditPage, SubjectListPage,
};

/// Main application component with routing.
///
/// Everything under `/dashboard` renders inside [`DashboardLayout`], which
/// gates on the session before delegating to a page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();
    provide_toaster();

    view! {
        <Title text="Academic Records Console"/>
        <Meta name="description" content="Administrative console for students, subjects and enrollments"/>

        <Router>
            <ToastHost/>
            <main class="min-h-screen bg-slate-950 text-slate-100">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                        <Route path=path!("") view=HomePage/>
                        <Route path=path!("estudiantes") view=StudentListPage/>
                        <Route path=path!("estudiantes/create") view=StudentCreatePage/>
                        <Route path=path!("estudiantes/edit/:id") view=StudentEditPage/>
                        <Route path=path!("materias") view=SubjectListPage/>
                        <Route path=path!("materias/create") view=SubjectCreatePage/>
                        <Route path=path!("materias/edit/:id") view=SubjectEditPage/>
                        <Route path=path!("matriculas") view=EnrollmentListPage/>
                        <Route path=path!("matriculas/create") view=EnrollmentCreatePage/>
                        <Route path=path!("matriculas/edit/:id") view=EnrollmentEditPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
