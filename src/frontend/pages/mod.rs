//! Page components for the console.

mod dashboard;
mod enrollments;
mod home;
mod login;
mod not_found;
mod students;
mod subjects;

pub use dashboard::DashboardLayout;
pub use enrollments::{EnrollmentCreatePage, EnrollmentEditPage, EnrollmentListPage};
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use students::{StudentCreatePage, StudentEditPage, StudentListPage};
pub use subjects::{SubjectCreatePage, SubjectEditPage, SubjectListPage};

/// Delay between a success toast and the navigation back to a list, long
/// enough for the toast to be seen.
pub const REDIRECT_DELAY_MS: u32 = 1_500;
