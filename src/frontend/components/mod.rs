//! Reusable UI components for the console.

mod button;
mod input;
mod nav;
mod select;
mod toast;

pub use button::SubmitButton;
pub use input::TextField;
pub use nav::Sidebar;
pub use select::SelectField;
pub use toast::{provide_toaster, use_toaster, ToastHost, Toaster};
