use axum::{
    async_trait,
    extract::{FromRequest, Request},
    response::IntoResponse,
};
use http::{header, HeaderValue};
use serde::Serialize;

use crate::error::ApiError;

// based on:
// https://github.com/tokio-rs/axum/blob/axum-v0.7.3/examples/customize-extractor-error/src/custom_extractor.rs
// quick test clients (curl without -H, fetch with a text body) don't always bother with the
// content type, so the body is parsed as json no matter what the header says. rejections come
// back as ApiError so the client always gets a {"detail": ...} body

#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        let Self(value) = self;
        axum::Json(value).into_response()
    }
}
