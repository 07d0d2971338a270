use serde::{Deserialize, Serialize};

use super::Identified;

/// Student summary joined into a listed enrollment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "nombre", default)]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: String,
    #[serde(rename = "cedula", default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Subject summary joined into a listed enrollment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "codigo", default)]
    pub code: String,
    #[serde(rename = "creditos", default)]
    pub credits: Option<u32>,
}

/// Enrollment as returned by `GET /matriculas`, already joined with its
/// student and subject. Either summary may be null; the table then renders
/// empty cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "codigo", default)]
    pub code: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "estudianteId", default)]
    pub student_id: Option<String>,
    #[serde(rename = "materiaId", default)]
    pub subject_id: Option<String>,
    #[serde(rename = "estudiante", default)]
    pub student: Option<StudentSummary>,
    #[serde(rename = "materia", default)]
    pub subject: Option<SubjectSummary>,
}

impl Enrollment {
    /// Student id to pre-select in the edit form. The raw reference wins;
    /// the embedded summary covers responses that only return the join.
    pub fn student_ref(&self) -> String {
        self.student_id
            .clone()
            .or_else(|| self.student.as_ref().and_then(|s| s.id.clone()))
            .unwrap_or_default()
    }

    pub fn subject_ref(&self) -> String {
        self.subject_id
            .clone()
            .or_else(|| self.subject.as_ref().and_then(|s| s.id.clone()))
            .unwrap_or_default()
    }

    pub fn student_name(&self) -> String {
        self.student
            .as_ref()
            .map(|s| format!("{} {}", s.first_name, s.last_name))
            .unwrap_or_default()
    }

    pub fn student_national_id(&self) -> String {
        self.student
            .as_ref()
            .and_then(|s| s.national_id.clone())
            .unwrap_or_default()
    }

    pub fn student_email(&self) -> String {
        self.student
            .as_ref()
            .and_then(|s| s.email.clone())
            .unwrap_or_default()
    }

    pub fn subject_name(&self) -> String {
        self.subject.as_ref().map(|s| s.name.clone()).unwrap_or_default()
    }

    pub fn subject_code(&self) -> String {
        self.subject.as_ref().map(|s| s.code.clone()).unwrap_or_default()
    }

    pub fn subject_credits(&self) -> String {
        self.subject
            .as_ref()
            .and_then(|s| s.credits)
            .map(|c| c.to_string())
            .unwrap_or_default()
    }
}

impl Identified for Enrollment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for `POST /matriculas` and `PUT /matriculas/{id}`. This is
/// the exact attribute set the API accepts, nothing client-side leaks in.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EnrollmentPayload {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "estudianteId")]
    pub student_id: String,
    #[serde(rename = "materiaId")]
    pub subject_id: String,
}

/// Inline errors for the enrollment form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnrollmentFormErrors {
    pub code: Option<String>,
    pub description: Option<String>,
    pub student_id: Option<String>,
    pub subject_id: Option<String>,
}

impl EnrollmentFormErrors {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.description.is_none()
            && self.student_id.is_none()
            && self.subject_id.is_none()
    }
}

impl EnrollmentPayload {
    /// Every field is mandatory: an enrollment must reference one student
    /// and one subject. Existence of the referenced records is the API's
    /// problem, not ours.
    pub fn validate(&self) -> EnrollmentFormErrors {
        let mut errors = EnrollmentFormErrors::default();
        if self.code.trim().is_empty() {
            errors.code = Some("Code is required".to_string());
        }
        if self.description.trim().is_empty() {
            errors.description = Some("Description is required".to_string());
        }
        if self.student_id.is_empty() {
            errors.student_id = Some("Select a student".to_string());
        }
        if self.subject_id.is_empty() {
            errors.subject_id = Some("Select a subject".to_string());
        }
        errors
    }

    pub fn from_record(enrollment: &Enrollment) -> Self {
        Self {
            code: enrollment.code.clone(),
            description: enrollment.description.clone(),
            student_id: enrollment.student_ref(),
            subject_id: enrollment.subject_ref(),
        }
    }
}
