use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

use crate::database::banners;


#[derive(Debug, thiserror::Error)]
#[error("SQL error: {0}")]
pub struct Sqlx(#[source] pub sqlx::Error);

#[derive(Debug, thiserror::Error)]
#[error("{0} not found")]
pub struct EntityNotFound(pub &'static str);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BadRequest(pub Cow<'static, str>);

#[derive(serde::Serialize)]
struct Body {
	error: String,
}

pub fn error_response(error: &dyn std::error::Error, status_code: StatusCode) -> Response {
	let body = Body {
		error: error.to_string(),
	};
	(status_code, Json(body)).into_response()
}

macro_rules! impl_response {
	($struct_name:ident, $status:ident) => {
		impl axum::response::IntoResponse for $struct_name {
			fn into_response(self) -> axum::response::Response {
				crate::error::error_response(&self, http::StatusCode::$status)
			}
		}
	};
}

impl_response!(EntityNotFound, NOT_FOUND);
impl_response!(BadRequest, BAD_REQUEST);

impl IntoResponse for Sqlx {
	fn into_response(self) -> Response {
		tracing::warn!(error = %self.0, "storage failure");
		error_response(&self, StatusCode::INTERNAL_SERVER_ERROR)
	}
}

impl IntoResponse for banners::Error {
	fn into_response(self) -> Response {
		match self {
			Self::NotFound => EntityNotFound("banner").into_response(),
			Self::Sqlx(inner) => Sqlx(inner).into_response(),
		}
	}
}
