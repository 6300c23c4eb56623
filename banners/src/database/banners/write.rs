use super::{Error, Result};
use crate::database::models::{banner_tag, BannerFields, BannerId};
use crate::database::Database;

pub async fn create(database: &Database, fields: &BannerFields) -> Result<BannerId> {
	let mut tx = database.begin().await?;

	let banner_id = sqlx::query_scalar::<_, BannerId>(
		"INSERT INTO banners (feature_id, title, text, url, is_active) VALUES ($1, $2, $3, $4, $5) RETURNING banner_id",
	)
	.bind(fields.feature_id)
	.bind(&fields.content.title)
	.bind(&fields.content.text)
	.bind(&fields.content.url)
	.bind(fields.is_active)
	.fetch_one(&mut *tx)
	.await?;

	banner_tag::insert_all(&mut *tx, banner_id, &fields.tag_ids).await?;

	tx.commit().await?;

	tracing::debug!(banner_id, tags = fields.tag_ids.len(), "created banner");
	Ok(banner_id)
}

/// Overwrite the banner and replace its tag set. Tags are deleted and re-inserted rather than
/// diffed; on any error the transaction is dropped and the banner keeps its previous state.
pub async fn update(database: &Database, banner_id: BannerId, fields: &BannerFields) -> Result<()> {
	let mut tx = database.begin().await?;

	let updated = sqlx::query(
		"UPDATE banners SET feature_id = $2, title = $3, text = $4, url = $5, is_active = $6 WHERE banner_id = $1",
	)
	.bind(banner_id)
	.bind(fields.feature_id)
	.bind(&fields.content.title)
	.bind(&fields.content.text)
	.bind(&fields.content.url)
	.bind(fields.is_active)
	.execute(&mut *tx)
	.await?
	.rows_affected();

	if updated == 0 {
		return Err(Error::NotFound);
	}

	let removed = banner_tag::delete_for(&mut *tx, banner_id).await?;
	banner_tag::insert_all(&mut *tx, banner_id, &fields.tag_ids).await?;

	tx.commit().await?;

	tracing::debug!(
		banner_id,
		removed_tags = removed,
		tags = fields.tag_ids.len(),
		"updated banner"
	);
	Ok(())
}

pub async fn delete(database: &Database, banner_id: BannerId) -> Result<()> {
	let mut tx = database.begin().await?;

	// the foreign key cascades as well, but don't depend on the schema for it
	let removed = banner_tag::delete_for(&mut *tx, banner_id).await?;

	let deleted = sqlx::query("DELETE FROM banners WHERE banner_id = $1")
		.bind(banner_id)
		.execute(&mut *tx)
		.await?
		.rows_affected();

	if deleted == 0 {
		return Err(Error::NotFound);
	}

	tx.commit().await?;

	tracing::debug!(banner_id, removed_tags = removed, "deleted banner");
	Ok(())
}
