//! `Json`, `Query` and `Path` that reject with [`error::BadRequest`], so malformed input gets the
//! same JSON error body as every other failure.

use axum::async_trait;
use axum::body::HttpBody;
use axum::extract::{FromRequest, RequestParts};
use axum::BoxError;
use serde::de::DeserializeOwned;

use crate::error;

fn bad_request(rejection: impl std::fmt::Display) -> error::BadRequest {
	error::BadRequest(rejection.to_string().into())
}

pub struct Json<T>(pub T);

#[async_trait]
impl<T, B> FromRequest<B> for Json<T>
where
	T: DeserializeOwned + Send,
	B: HttpBody + Send,
	B::Data: Send,
	B::Error: Into<BoxError>,
{
	type Rejection = error::BadRequest;

	async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
		axum::Json::<T>::from_request(req)
			.await
			.map(|axum::Json(inner)| Self(inner))
			.map_err(bad_request)
	}
}

pub struct Query<T>(pub T);

#[async_trait]
impl<T, B> FromRequest<B> for Query<T>
where
	T: DeserializeOwned + Send,
	B: Send,
{
	type Rejection = error::BadRequest;

	async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
		axum::extract::Query::<T>::from_request(req)
			.await
			.map(|axum::extract::Query(inner)| Self(inner))
			.map_err(bad_request)
	}
}

pub struct Path<T>(pub T);

#[async_trait]
impl<T, B> FromRequest<B> for Path<T>
where
	T: DeserializeOwned + Send,
	B: Send,
{
	type Rejection = error::BadRequest;

	async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
		axum::extract::Path::<T>::from_request(req)
			.await
			.map(|axum::extract::Path(inner)| Self(inner))
			.map_err(bad_request)
	}
}
