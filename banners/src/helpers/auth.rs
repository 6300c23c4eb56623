use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequest, RequestParts};
use axum::response::{IntoResponse, Response};
use headers::authorization::Bearer;
use headers::{Authorization, HeaderMapExt as _};
use http::StatusCode;
use subtle::ConstantTimeEq as _;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
	User,
	Admin,
}

impl Role {
	/// Both tokens are compared in constant time.
	fn for_token(config: &Config, token: &str) -> Option<Self> {
		let token = token.as_bytes();
		let is_admin: bool = token.ct_eq(config.admin_token.as_bytes()).into();
		let is_user: bool = token.ct_eq(config.user_token.as_bytes()).into();
		if is_admin {
			Some(Self::Admin)
		} else if is_user {
			Some(Self::User)
		} else {
			None
		}
	}
}

/// Any caller holding a known bearer token.
pub struct Auth(pub Role);

impl Auth {
	fn extract<B>(req: &RequestParts<B>) -> Result<Self> {
		let config = req
			.extensions()
			.get::<Arc<Config>>()
			.ok_or(Error::Unconfigured)?;
		let header = req
			.headers()
			.typed_get::<Authorization<Bearer>>()
			.ok_or(Error::NoToken)?;
		Role::for_token(config, header.token())
			.map(Self)
			.ok_or(Error::Invalid)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no bearer token")]
	NoToken,
	#[error("invalid token")]
	Invalid,
	#[error("you do not have permission to access this resource")]
	Forbidden,
	#[error("token configuration is not available")]
	Unconfigured,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
	fn status_code(&self) -> StatusCode {
		match self {
			Self::NoToken | Self::Invalid => StatusCode::UNAUTHORIZED,
			Self::Forbidden => StatusCode::FORBIDDEN,
			Self::Unconfigured => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		crate::error::error_response(&self, self.status_code())
	}
}

#[async_trait]
impl<B: Send> FromRequest<B> for Auth {
	type Rejection = Error;

	async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
		Self::extract(req)
	}
}

macro_rules! role_extractor {
	($extractor_name:ident, $min_role:ident) => {
		pub struct $extractor_name;

		#[async_trait]
		impl<B: Send> FromRequest<B> for $extractor_name {
			type Rejection = Error;

			async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
				let Auth(role) = Auth::extract(req)?;
				if role < Role::$min_role {
					Err(Error::Forbidden)
				} else {
					Ok(Self)
				}
			}
		}
	};
}

role_extractor!(Admin, Admin);
