use std::net::SocketAddr;

use axum::Router;

use super::Error;

pub async fn run(app: Router, addr: &SocketAddr) -> Result<(), Error> {
	axum::Server::bind(addr)
		.serve(app.into_make_service())
		.with_graceful_shutdown(shutdown_signal())
		.await
		.map_err(Error::RunServer)
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::error!(%error, "could not listen for shutdown signal");
		// never resolve, so the server keeps running
		std::future::pending::<()>().await;
	}
	tracing::info!("shutting down");
}
