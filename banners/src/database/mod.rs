use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Result;

pub mod banners;
pub mod models;

pub type Database = PgPool;

/// Open the pool and bring the schema up to date with the embedded migrations.
pub async fn connect(conn_str: &str, max_connections: u32) -> Result<Database> {
	let conn = PgPoolOptions::new()
		.max_connections(max_connections)
		.connect(conn_str)
		.await?;
	sqlx::migrate!().run(&conn).await?;
	Ok(conn)
}
