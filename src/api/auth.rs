use serde::{Deserialize, Serialize};

use super::{ApiResult, Client};

/// Credentials for `POST /login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response. The display name is optional on the wire.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
}

impl LoginResponse {
    /// Name shown in the dashboard; falls back to the email's local part.
    pub fn display_name(&self, email: &str) -> String {
        self.name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or("admin").to_string())
    }
}

impl Client {
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post_json("/login", credentials).await
    }
}
