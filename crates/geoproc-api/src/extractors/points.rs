//! Extractor that reads the raw body and runs the point validator.
//!
//! The body is decoded without regard to `Content-Type` so that type
//! mismatches surface as validation errors rather than rejections from
//! `Json<T>`.

use axum::extract::{FromRequest, Request};
use bytes::Bytes;

use geoproc_core::types::PointList;
use geoproc_core::validation::validate_body;

use crate::error::ApiError;

/// A request body that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedPoints(pub PointList);

impl<S> FromRequest<S> for ValidatedPoints
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        let points = validate_body(&body)?;
        Ok(Self(points))
    }
}
