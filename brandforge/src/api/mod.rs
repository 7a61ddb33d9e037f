//! HTTP API layer: handlers, wire models, and shared extractors.
//!
//! Every response uses the same envelope: `{"success": true, "data": ...}`
//! on success, `{"success": false, "error": ..., "details"?: ...}` on
//! failure (produced by [`crate::errors::Error`]'s `IntoResponse`).

pub mod handlers;
pub mod models;

use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::Serialize;

use crate::errors::Error;

/// Success envelope wrapping every `data` payload.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T: Serialize> {
    pub success: bool,
    pub data: T,
}

/// Shorthand for the common `200 {success: true, data}` response.
pub fn ok<T: Serialize>(data: T) -> Json<ApiSuccess<T>> {
    Json(ApiSuccess { success: true, data })
}

/// JSON body extractor that reports deserialization failures through the
/// standard error envelope (HTTP 400) instead of axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(Error::BadRequest {
                message: "Invalid request body".to_string(),
                details: Some(serde_json::Value::String(rejection.body_text())),
            }),
        }
    }
}
