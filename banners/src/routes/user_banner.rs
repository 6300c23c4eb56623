use std::sync::Arc;

use axum::response::ErrorResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};

use super::require_positive;
use crate::database::models::{Content, FeatureId, TagId};
use crate::database::{banners, Database};
use crate::error;
use crate::helpers::{auth, extract};

#[derive(serde::Deserialize)]
pub struct Query {
	feature_id: Option<FeatureId>,
	tag_id: Option<TagId>,
	/// Accepted for compatibility; every lookup already reads the latest committed state.
	#[serde(default)]
	use_last_revision: bool,
}

impl Query {
	fn validate(&self) -> Result<(FeatureId, TagId), error::BadRequest> {
		let feature_id = self
			.feature_id
			.ok_or_else(|| error::BadRequest("feature_id is required".into()))?;
		let tag_id = self
			.tag_id
			.ok_or_else(|| error::BadRequest("tag_id is required".into()))?;
		require_positive("feature_id", feature_id.into())?;
		require_positive("tag_id", tag_id.into())?;
		Ok((feature_id, tag_id))
	}
}

pub async fn get_handler(
	auth::Auth(role): auth::Auth,
	extract::Query(query): extract::Query<Query>,
	Extension(database): Extension<Arc<Database>>,
) -> Result<Json<Content>, ErrorResponse> {
	let (feature_id, tag_id) = query.validate()?;

	tracing::debug!(
		?role,
		feature_id,
		tag_id,
		use_last_revision = query.use_last_revision,
		"user banner lookup"
	);

	let content = banners::user_banner(&database, feature_id, tag_id).await?;
	Ok(Json(content))
}

pub fn configure() -> Router {
	Router::new().route("/user_banner", get(get_handler))
}
