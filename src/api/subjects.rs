use web_sys::AbortSignal;

use super::{ApiResult, Client};
use crate::models::{Subject, SubjectPayload};

impl Client {
    pub async fn list_subjects(&self, abort: Option<&AbortSignal>) -> ApiResult<Vec<Subject>> {
        self.get_json("/materias", abort).await
    }

    pub async fn create_subject(&self, payload: &SubjectPayload) -> ApiResult<Subject> {
        self.post_json("/materias", payload).await
    }

    pub async fn update_subject(&self, id: &str, payload: &SubjectPayload) -> ApiResult<Subject> {
        self.put_json(&format!("/materias/{id}"), payload).await
    }

    pub async fn delete_subject(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/materias/{id}")).await
    }
}
