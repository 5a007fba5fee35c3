//! Request body extractor that reports rejections as `ApiError`

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;

/// JSON body whose rejections (bad syntax, wrong field types, missing
/// content type) become a 400 with the standard error body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(status = %rejection.status(), "Rejected request body");
                ApiError::BadRequest(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}
