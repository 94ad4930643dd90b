//! JSON body extractor that reports malformed bodies in the `{errors}` shape.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Deserialize a JSON body, turning rejections into `AppError::Validation`.
///
/// Field rules are not run here: handlers normalize and check payloads
/// themselves so that lookups (404) can happen before validation (400).
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(vec![e.body_text()]))?;

        Ok(JsonBody(value))
    }
}
