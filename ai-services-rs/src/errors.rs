//! HTTP error envelope
//!
//! Every error leaving the service is rendered as
//! `{error, detail, status_code, path[, type]}`. Handlers return [`ApiError`];
//! [`error_envelope_middleware`] stamps the request path onto the envelope,
//! wraps bare framework errors (unknown route, wrong method) and turns handler
//! panics into a 500.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    async_trait,
    body::Body,
    extract::{
        rejection::{BytesRejection, JsonRejection},
        FromRequest, Request,
    },
    http::{header::CONTENT_LENGTH, header::CONTENT_TYPE, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use futures_util::FutureExt;
use http_body::Body as _;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

const HTTP_ERROR: &str = "HTTP Error";
const INTERNAL_ERROR: &str = "Internal Server Error";

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub detail: String,
    pub status_code: u16,
    /// Request URI, filled in by [`error_envelope_middleware`]
    pub path: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client-visible HTTP error, e.g. a malformed request body
    #[error("{detail}")]
    Http { status: StatusCode, detail: String },

    #[error("Test generation failed: {0}")]
    TestGeneration(String),

    #[error("Failure analysis failed: {0}")]
    FailureAnalysis(String),

    /// Unhandled failure; the detail text is fixed
    #[error("An unexpected error occurred")]
    Internal { type_name: String },
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError::Http {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Http { status, .. } => *status,
            ApiError::TestGeneration(_)
            | ApiError::FailureAnalysis(_)
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let (error, error_type) = match self {
            ApiError::Internal { type_name } => (INTERNAL_ERROR, Some(type_name.clone())),
            _ => (HTTP_ERROR, None),
        };
        ErrorEnvelope {
            error: error.to_string(),
            detail: self.to_string(),
            status_code: self.status().as_u16(),
            path: String::new(),
            error_type,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = self.envelope();
        let mut response = (status, Json(envelope.clone())).into_response();
        response.extensions_mut().insert(envelope);
        response
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Http {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Http {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

/// `axum::Json` whose rejection renders as an [`ErrorEnvelope`]
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// Outermost error boundary of the router
pub async fn error_envelope_middleware(req: Request, next: Next) -> Response {
    let path = req.uri().to_string();

    let response = match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(path = %path, panic = %panic_message(panic.as_ref()), "Request handler panicked");
            ApiError::Internal {
                type_name: "Panic".to_string(),
            }
            .into_response()
        }
    };

    with_request_path(response, &path)
}

fn with_request_path(mut response: Response, path: &str) -> Response {
    let status = response.status();

    let envelope = match response.extensions_mut().remove::<ErrorEnvelope>() {
        Some(envelope) => envelope,
        None if is_bare_error(&response) => ApiError::Http {
            status,
            detail: status.canonical_reason().unwrap_or(HTTP_ERROR).to_string(),
        }
        .envelope(),
        None => return response,
    };

    let envelope = ErrorEnvelope {
        path: path.to_string(),
        ..envelope
    };

    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), path, detail = %envelope.detail, "Request failed");
    } else {
        tracing::warn!(status = status.as_u16(), path, detail = %envelope.detail, "Request rejected");
    }

    // Keep framework headers such as `Allow`, replace the body
    let (mut parts, _) = response.into_parts();
    let body = Json(&envelope).into_response().into_body();
    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    parts.extensions.insert(envelope);
    Response::from_parts(parts, body)
}

/// Error status with an empty body, as produced by the router itself
fn is_bare_error(response: &Response<Body>) -> bool {
    let status = response.status();
    (status.is_client_error() || status.is_server_error())
        && response.body().size_hint().exact() == Some(0)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
