use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{Extension, Router};

use crate::config::Config;
use crate::database::Database;
use crate::error;

mod banner;
mod user_banner;


macro_rules! merge {
	($app:ident, $name:ident) => {
		$app = $app.merge($name::configure());
	};
	($app:ident; $($name:ident),+) => {
		$(merge!($app, $name));+
	};
}

pub fn configure() -> Router {
	let mut app = Router::new();

	merge!(app; banner, user_banner);

	app.fallback(axum::handler::Handler::into_service(fallback))
}

/// The routes together with the shared state their handlers and extractors read.
pub fn app(database: Arc<Database>, config: Arc<Config>) -> Router {
	configure()
		.layer(Extension(database))
		.layer(Extension(config))
		.layer(tower_http::trace::TraceLayer::new_for_http())
}

async fn fallback() -> impl IntoResponse {
	error::EntityNotFound("route")
}

fn require_positive(name: &str, value: i64) -> Result<(), error::BadRequest> {
	if value > 0 {
		Ok(())
	} else {
		Err(error::BadRequest(format!("{name} must be positive").into()))
	}
}

fn require_non_negative(name: &str, value: i64) -> Result<(), error::BadRequest> {
	if value >= 0 {
		Ok(())
	} else {
		Err(error::BadRequest(format!("{name} must not be negative").into()))
	}
}
