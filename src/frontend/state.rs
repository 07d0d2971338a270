//! Lifecycle state shared by the create and edit forms.

/// Phases a form moves through, from dependency loading to the redirect
/// after a successful save.
///
/// The submit control is enabled only in `Ready`, which is also the
/// explicit guard against duplicate submissions. `NotFound` is terminal and
/// only reachable while an edit view is still locating its record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Ready,
    Submitting,
    Saved,
    NotFound,
}

impl FormState {
    pub fn can_submit(&self) -> bool {
        matches!(self, FormState::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::Loading)
    }

    /// True while a request is in flight or the success redirect is
    /// pending; drives the submit button's spinner.
    pub fn is_busy(&self) -> bool {
        matches!(self, FormState::Submitting | FormState::Saved)
    }
}
