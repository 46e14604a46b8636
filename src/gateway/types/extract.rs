//! Extractors that reject with the uniform error body
//!
//! axum's own `Json` and `Path` answer bad input with plain-text rejections
//! and a mix of 400/415/422. These wrappers turn every rejection into a
//! 400 [`ApiError`] carrying the request path.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, OriginalUri, Path, Request},
    http::{Uri, request::Parts},
};
use serde::de::DeserializeOwned;

use super::response::ApiError;
use crate::reservation::ReservationError;

fn request_path(original: Option<&OriginalUri>, uri: &Uri) -> String {
    original.map(|o| o.0.path()).unwrap_or(uri.path()).to_owned()
}

/// JSON request body
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = request_path(req.extensions().get::<OriginalUri>(), req.uri());
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError::new(
                ReservationError::BadRequest(rejection.body_text()),
                path,
            )),
        }
    }
}

/// Typed path parameter
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => Err(ApiError::new(
                ReservationError::BadRequest(rejection.body_text()),
                request_path(parts.extensions.get::<OriginalUri>(), &parts.uri),
            )),
        }
    }
}
