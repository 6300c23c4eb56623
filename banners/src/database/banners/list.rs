use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use super::Result;
use crate::database::models::{banner_tag, Banner, BannerView, FeatureId, TagId};
use crate::database::Database;

pub type PageNum = i64;

const SELECT_BANNERS: &str =
	"SELECT b.banner_id, b.feature_id, b.title, b.text, b.url, b.is_active FROM banners b";

/// Criteria for the administrative listing. Zero in any field means "not set".
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ListFilter {
	pub feature_id: FeatureId,
	pub tag_id: TagId,
	pub limit: PageNum,
	pub offset: PageNum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Predicate {
	Feature(FeatureId),
	Tag(TagId),
}

impl ListFilter {
	fn predicates(&self) -> impl Iterator<Item = Predicate> {
		let feature = (self.feature_id != 0).then_some(Predicate::Feature(self.feature_id));
		let tag = (self.tag_id != 0).then_some(Predicate::Tag(self.tag_id));
		feature.into_iter().chain(tag)
	}

	pub(super) fn query(&self) -> QueryBuilder<'static, Postgres> {
		let mut builder = QueryBuilder::new(SELECT_BANNERS);

		let mut predicates = self.predicates().peekable();
		if predicates.peek().is_some() {
			builder.push(" WHERE ");
			let mut separated = builder.separated(" AND ");
			for predicate in predicates {
				match predicate {
					Predicate::Feature(feature_id) => {
						separated
							.push("b.feature_id = ")
							.push_bind_unseparated(feature_id);
					}
					Predicate::Tag(tag_id) => {
						separated
							.push("b.banner_id IN (SELECT banner_id FROM banner_tags WHERE tag_id = ")
							.push_bind_unseparated(tag_id)
							.push_unseparated(")");
					}
				}
			}
		}

		builder.push(" ORDER BY b.banner_id");

		if self.limit > 0 {
			builder.push(" LIMIT ").push_bind(self.limit);
		}
		if self.offset > 0 {
			builder.push(" OFFSET ").push_bind(self.offset);
		}

		builder
	}
}

/// List banners matching `filter`, each with its current tag set.
///
/// The tags are fetched per banner after the main query; see the module docs for what that
/// means under concurrent writes. Any error discards the whole result.
pub async fn list(database: &Database, filter: &ListFilter) -> Result<Vec<BannerView>> {
	let banners = filter
		.query()
		.build_query_as::<Banner>()
		.fetch_all(database)
		.await?;

	let mut views = Vec::with_capacity(banners.len());
	for banner in banners {
		let tag_ids = banner_tag::tag_ids_for(database, banner.banner_id).await?;
		views.push(banner.into_view(tag_ids));
	}

	Ok(views)
}
