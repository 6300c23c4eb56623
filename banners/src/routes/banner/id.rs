use std::sync::Arc;

use axum::response::ErrorResponse;
use axum::Extension;
use http::StatusCode;

use super::validate_fields;
use crate::database::models::{BannerFields, BannerId};
use crate::database::{banners, Database};
use crate::helpers::{auth, extract};

/// Replace the banner wholesale, tags included.
pub async fn patch_handler(
	_admin: auth::Admin,
	extract::Path(banner_id): extract::Path<BannerId>,
	Extension(database): Extension<Arc<Database>>,
	extract::Json(fields): extract::Json<BannerFields>,
) -> Result<StatusCode, ErrorResponse> {
	validate_fields(&fields)?;

	banners::update(&database, banner_id, &fields).await?;
	tracing::info!(banner_id, "banner updated");

	Ok(StatusCode::OK)
}

pub async fn delete_handler(
	_admin: auth::Admin,
	extract::Path(banner_id): extract::Path<BannerId>,
	Extension(database): Extension<Arc<Database>>,
) -> Result<StatusCode, ErrorResponse> {
	banners::delete(&database, banner_id).await?;
	tracing::info!(banner_id, "banner deleted");

	Ok(StatusCode::NO_CONTENT)
}
