//! Request body limits and raw-text body extraction

use axum::{
    async_trait,
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequest, Request},
};

use crate::errors::ApiError;

/// Default maximum request payload size (10MB)
pub const MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Body limit applied to every extractor in the router
///
/// Oversized bodies surface as a 413 rejection from the extractor, so they go
/// through the regular error envelope.
pub fn payload_limit_config() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_PAYLOAD_SIZE)
}

/// Raw UTF-8 request body, used by the placeholder text endpoints
#[derive(Debug, Clone)]
pub struct TextBody(pub String);

#[async_trait]
impl<S> FromRequest<S> for TextBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        String::from_utf8(bytes.to_vec())
            .map(TextBody)
            .map_err(|_| ApiError::bad_request("Request body is not valid UTF-8"))
    }
}
