use std::sync::Arc;

use axum::response::ErrorResponse;
use axum::routing::{get, patch};
use axum::{Extension, Json, Router};
use http::StatusCode;

use super::{require_non_negative, require_positive};
use crate::database::banners::{self, ListFilter};
use crate::database::models::{BannerFields, BannerId, BannerView};
use crate::database::Database;
use crate::error;
use crate::helpers::{auth, extract};

mod id;

fn validate_fields(fields: &BannerFields) -> Result<(), error::BadRequest> {
	require_positive("feature_id", fields.feature_id.into())?;
	// sorted, so the smallest id comes first
	if let Some(&tag_id) = fields.tag_ids.iter().next() {
		require_positive("tag_ids", tag_id.into())?;
	}
	Ok(())
}

fn validate_filter(filter: &ListFilter) -> Result<(), error::BadRequest> {
	require_non_negative("feature_id", filter.feature_id.into())?;
	require_non_negative("tag_id", filter.tag_id.into())?;
	require_non_negative("limit", filter.limit)?;
	require_non_negative("offset", filter.offset)?;
	Ok(())
}

pub async fn get_handler(
	_admin: auth::Admin,
	extract::Query(filter): extract::Query<ListFilter>,
	Extension(database): Extension<Arc<Database>>,
) -> Result<Json<Vec<BannerView>>, ErrorResponse> {
	validate_filter(&filter)?;

	let views = banners::list(&database, &filter).await?;
	Ok(Json(views))
}

#[derive(serde::Serialize)]
pub struct Created {
	banner_id: BannerId,
}

pub async fn post_handler(
	_admin: auth::Admin,
	Extension(database): Extension<Arc<Database>>,
	extract::Json(fields): extract::Json<BannerFields>,
) -> Result<(StatusCode, Json<Created>), ErrorResponse> {
	validate_fields(&fields)?;

	let banner_id = banners::create(&database, &fields).await?;
	tracing::info!(banner_id, feature_id = fields.feature_id, "banner created");

	Ok((StatusCode::CREATED, Json(Created { banner_id })))
}

pub fn configure() -> Router {
	Router::new()
		.route("/banner", get(get_handler).post(post_handler))
		.route(
			"/banner/:banner_id",
			patch(id::patch_handler).delete(id::delete_handler),
		)
}
