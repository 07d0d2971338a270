use serde::{Deserialize, Serialize};

use super::Identified;

/// Student record as returned by `GET /estudiantes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "fecha_nacimiento", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "cedula", default)]
    pub national_id: Option<String>,
    #[serde(rename = "ciudad", default)]
    pub city: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identified for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for `POST /estudiantes` and `PUT /estudiantes/{id}`.
///
/// Doubles as the form draft: every field is entered as text and sent
/// verbatim, optional ones as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StudentPayload {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
}

/// Inline errors for the student form's required fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentFormErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
}

impl StudentFormErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.birth_date.is_none()
    }
}

impl StudentPayload {
    /// Required-field validation; submission is gated on an empty result.
    pub fn validate(&self) -> StudentFormErrors {
        let mut errors = StudentFormErrors::default();
        if self.first_name.trim().is_empty() {
            errors.first_name = Some("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.last_name = Some("Last name is required".to_string());
        }
        if self.birth_date.trim().is_empty() {
            errors.birth_date = Some("Birth date is required".to_string());
        }
        errors
    }

    /// Pre-fills the edit form from a located record. Missing optionals
    /// become empty strings so controlled inputs always hold a value.
    pub fn from_record(student: &Student) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            birth_date: student
                .birth_date
                .as_deref()
                .map(date_input_value)
                .unwrap_or_default(),
            national_id: student.national_id.clone().unwrap_or_default(),
            city: student.city.clone().unwrap_or_default(),
            address: student.address.clone().unwrap_or_default(),
            phone: student.phone.clone().unwrap_or_default(),
            email: student.email.clone().unwrap_or_default(),
        }
    }
}

/// Reduces an API date to the `YYYY-MM-DD` form a date input accepts.
///
/// The API may return either a bare date or a full ISO timestamp; anything
/// else degrades to an empty string rather than a broken input value.
pub fn date_input_value(raw: &str) -> String {
    if chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_string();
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
