use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{FeatureId, TagId};

pub type Id = super::Id;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Content {
	pub title: String,
	pub text: String,
	pub url: String,
}

/// Everything a write replaces wholesale: the banner row and its full tag set.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BannerFields {
	#[serde(default)]
	pub tag_ids: BTreeSet<TagId>,
	pub feature_id: FeatureId,
	pub content: Content,
	pub is_active: bool,
}

/// A row of the `banners` table.
#[derive(sqlx::FromRow, Debug)]
pub struct Banner {
	pub banner_id: Id,
	pub feature_id: FeatureId,
	pub title: String,
	pub text: String,
	pub url: String,
	pub is_active: bool,
}

impl Banner {
	pub fn into_view(self, tag_ids: Vec<TagId>) -> BannerView {
		BannerView {
			banner_id: self.banner_id,
			tag_ids,
			feature_id: self.feature_id,
			content: Content {
				title: self.title,
				text: self.text,
				url: self.url,
			},
			is_active: self.is_active,
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
	pub banner_id: Id,
	pub tag_ids: Vec<TagId>,
	pub feature_id: FeatureId,
	pub content: Content,
	pub is_active: bool,
}
