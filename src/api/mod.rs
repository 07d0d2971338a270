//! Thin HTTP client for the records API.
//!
//! Every authenticated call carries `Authorization: Bearer <token>`. Failed
//! requests decode the API's `{ msg }` error body when present and degrade
//! to a generic message otherwise. Mount-time fetches accept an abort
//! signal so a torn-down view can cancel its outstanding requests.

pub use auth::{LoginRequest, LoginResponse};

mod auth;
mod enrollments;
mod students;
mod subjects;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::AbortSignal;

use crate::config;
use crate::session::use_session;

/// Body shape the API uses when it reports a failure.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: String,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// Transport failure, the request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx response, with the API's message when it sent one.
    #[error("{}", .msg.as_deref().unwrap_or("the server rejected the request"))]
    Api { status: u16, msg: Option<String> },
    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Fetch cancelled because the requesting view was torn down.
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Message suitable for a user-facing toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { msg: Some(msg), .. } => msg.clone(),
            _ => "Something went wrong, please try again".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn from_transport(err: gloo_net::Error) -> ApiError {
    let text = err.to_string();
    if text.contains("AbortError") {
        ApiError::Aborted
    } else {
        ApiError::Network(text)
    }
}

async fn fail_from(response: Response) -> ApiError {
    let status = response.status();
    let msg = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.msg)
        .filter(|msg| !msg.is_empty());
    ApiError::Api { status, msg }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        Err(fail_from(response).await)
    }
}

/// Client bound to the configured base URL and, usually, a bearer token.
#[derive(Clone, Debug)]
pub struct Client {
    base: String,
    token: Option<String>,
}

impl Client {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base: config::api_base().to_string(),
            token,
        }
    }

    /// Client for the login call, which runs without a token.
    pub fn anonymous() -> Self {
        Self::new(None)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        abort: Option<&AbortSignal>,
    ) -> ApiResult<T> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .abort_signal(abort)
            .send()
            .await
            .map_err(from_transport)?;
        decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(from_transport)?;
        let response = request.send().await.map_err(from_transport)?;
        decode(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(from_transport)?;
        let response = request.send().await.map_err(from_transport)?;
        decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(from_transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(fail_from(response).await)
        }
    }
}

/// Client bound to the live session's token. Call from component scope.
pub fn use_client() -> Client {
    Client::new(use_session().token())
}

/// Abort signal wired to the current reactive scope: requests carrying it
/// are cancelled when the view that issued them is torn down, and their
/// results are discarded instead of landing in disposed state.
pub fn scoped_abort_signal() -> Option<AbortSignal> {
    let controller = web_sys::AbortController::new().ok()?;
    let signal = controller.signal();
    leptos::prelude::on_cleanup(move || controller.abort());
    Some(signal)
}
