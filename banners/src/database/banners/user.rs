use super::{Error, Result};
use crate::database::models::{Content, FeatureId, TagId};
use crate::database::Database;

/// Content of an active banner carrying both `feature_id` and `tag_id`.
///
/// Inactive and missing banners both come back as [`Error::NotFound`]. If several banners match
/// the pair, which one is returned is unspecified.
pub async fn user_banner(database: &Database, feature_id: FeatureId, tag_id: TagId) -> Result<Content> {
	sqlx::query_as::<_, Content>(
		"SELECT b.title, b.text, b.url FROM banners b JOIN banner_tags bt ON bt.banner_id = b.banner_id WHERE b.feature_id = $1 AND bt.tag_id = $2 AND b.is_active LIMIT 1",
	)
	.bind(feature_id)
	.bind(tag_id)
	.fetch_optional(database)
	.await?
	.ok_or(Error::NotFound)
}
