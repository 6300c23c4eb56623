#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use tracing_subscriber::filter::Targets;

mod config;
mod database;
mod error;
mod helpers;
mod routes;
mod server;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("reading configuration: {0}")]
	Config(#[from] figment::Error),
	#[error("connecting to database: {0}")]
	ConnectDb(#[from] sqlx::Error),
	#[error("running server: {0}")]
	RunServer(#[from] hyper::Error),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let config = Arc::new(config::config()?);

	init_logging(config.log_level);

	let database = database::connect(&config.database_url, config.max_connections)
		.await
		.map(Arc::new)?;
	tracing::info!(max_connections = config.max_connections, "database ready");

	let app = routes::app(database, Arc::clone(&config));

	tracing::info!(address = %config.address, "listening");
	server::run(app, &config.address).await
}

/// Our own events pass at `internal`, everything else at `external`.
fn log_filter(log_level: config::LogLevel) -> Targets {
	Targets::new()
		.with_target(env!("CARGO_CRATE_NAME"), log_level.internal)
		.with_default(log_level.external)
}

fn init_logging(log_level: config::LogLevel) {
	use tracing_subscriber::layer::{Layer, SubscriberExt};
	use tracing_subscriber::util::SubscriberInitExt;

	let layer = tracing_subscriber::fmt::layer()
		.with_file(true)
		.with_line_number(true)
		.with_writer(std::io::stderr)
		.with_filter(log_filter(log_level));

	tracing_subscriber::registry().with(layer).init();
}
