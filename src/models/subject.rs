use serde::{Deserialize, Serialize};

use super::Identified;

/// Subject record as returned by `GET /materias`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "creditos", default)]
    pub credits: Option<u32>,
}

impl Subject {
    /// Label shown in the enrollment form's subject select.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl Identified for Subject {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for `POST /materias` and `PUT /materias/{id}`. Credits are
/// numeric on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubjectPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "creditos")]
    pub credits: u32,
}

/// Form draft for a subject; credits arrive as text and are parsed during
/// validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubjectForm {
    pub name: String,
    pub code: String,
    pub credits: String,
}

/// Inline errors for the subject form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubjectFormErrors {
    pub name: Option<String>,
    pub code: Option<String>,
    pub credits: Option<String>,
}

impl SubjectFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none() && self.credits.is_none()
    }
}

impl SubjectForm {
    /// Validates the draft and reshapes it into the wire payload.
    pub fn validate(&self) -> Result<SubjectPayload, SubjectFormErrors> {
        let mut errors = SubjectFormErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if self.code.trim().is_empty() {
            errors.code = Some("Code is required".to_string());
        }
        let credits = if self.credits.trim().is_empty() {
            errors.credits = Some("Credits are required".to_string());
            None
        } else {
            match self.credits.trim().parse::<u32>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.credits = Some("Credits must be a whole number".to_string());
                    None
                }
            }
        };

        match credits {
            Some(credits) if errors.is_empty() => Ok(SubjectPayload {
                name: self.name.clone(),
                code: self.code.clone(),
                credits,
            }),
            _ => Err(errors),
        }
    }

    pub fn from_record(subject: &Subject) -> Self {
        Self {
            name: subject.name.clone(),
            code: subject.code.clone(),
            credits: subject.credits.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}
