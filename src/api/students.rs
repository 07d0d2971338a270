use web_sys::AbortSignal;

use super::{ApiResult, Client};
use crate::models::{Student, StudentPayload};

impl Client {
    pub async fn list_students(&self, abort: Option<&AbortSignal>) -> ApiResult<Vec<Student>> {
        self.get_json("/estudiantes", abort).await
    }

    pub async fn create_student(&self, payload: &StudentPayload) -> ApiResult<Student> {
        self.post_json("/estudiantes", payload).await
    }

    pub async fn update_student(&self, id: &str, payload: &StudentPayload) -> ApiResult<Student> {
        self.put_json(&format!("/estudiantes/{id}"), payload).await
    }

    pub async fn delete_student(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/estudiantes/{id}")).await
    }
}
