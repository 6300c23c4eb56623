//! Rows of the `banner_tags` join table. A row is only the `(banner_id, tag_id)` pair, which is
//! also its primary key, so these helpers work on tag id sets rather than row structs.

use std::collections::BTreeSet;

use sqlx::Postgres;

use super::{BannerId, TagId};

/// Insert one row per tag. The ids travel as a single array parameter, so the statement's bind
/// count does not grow with the tag set. An empty set is a no-op.
pub async fn insert_all(
	database: impl sqlx::Executor<'_, Database = Postgres>,
	banner_id: BannerId,
	tag_ids: &BTreeSet<TagId>,
) -> sqlx::Result<()> {
	if tag_ids.is_empty() {
		return Ok(());
	}

	let tag_ids: Vec<TagId> = tag_ids.iter().copied().collect();
	sqlx::query("INSERT INTO banner_tags (banner_id, tag_id) SELECT $1, unnest($2::int4[])")
		.bind(banner_id)
		.bind(tag_ids)
		.execute(database)
		.await?;
	Ok(())
}

pub async fn delete_for(
	database: impl sqlx::Executor<'_, Database = Postgres>,
	banner_id: BannerId,
) -> sqlx::Result<u64> {
	sqlx::query("DELETE FROM banner_tags WHERE banner_id = $1")
		.bind(banner_id)
		.execute(database)
		.await
		.map(|result| result.rows_affected())
}

pub async fn tag_ids_for(
	database: impl sqlx::Executor<'_, Database = Postgres>,
	banner_id: BannerId,
) -> sqlx::Result<Vec<TagId>> {
	sqlx::query_scalar::<_, TagId>("SELECT tag_id FROM banner_tags WHERE banner_id = $1 ORDER BY tag_id")
		.bind(banner_id)
		.fetch_all(database)
		.await
}
