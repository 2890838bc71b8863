use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{extractors::Json, types::InvalidFormat};

/// Everything a handler can fail with. Rendered as `{"detail": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    InvalidCube(#[from] InvalidFormat),
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCube(_) => StatusCode::BAD_REQUEST,
            Self::MalformedBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::MalformedBody(rejection) => rejection.body_text(),
            _ => self.to_string(),
        };
        (self.status(), Json(json!({ "detail": detail }))).into_response()
    }
}
