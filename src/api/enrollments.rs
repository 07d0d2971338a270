use web_sys::AbortSignal;

use super::{ApiResult, Client};
use crate::models::{Enrollment, EnrollmentPayload};

impl Client {
    /// Full enrollment collection, joined with student and subject
    /// summaries. Also the only way to reach a single enrollment.
    pub async fn list_enrollments(&self, abort: Option<&AbortSignal>) -> ApiResult<Vec<Enrollment>> {
        self.get_json("/matriculas", abort).await
    }

    pub async fn create_enrollment(&self, payload: &EnrollmentPayload) -> ApiResult<Enrollment> {
        self.post_json("/matriculas", payload).await
    }

    pub async fn update_enrollment(
        &self,
        id: &str,
        payload: &EnrollmentPayload,
    ) -> ApiResult<Enrollment> {
        self.put_json(&format!("/matriculas/{id}"), payload).await
    }

    pub async fn delete_enrollment(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/matriculas/{id}")).await
    }
}
