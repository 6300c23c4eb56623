//! These run against a real Postgres named by `BANNERS_TEST_DATABASE_URL` and are skipped when it
//! is unset. Each test owns a distinct feature id and tag range so they can share one database.

use std::collections::BTreeSet;

use crate::database::models::{banner_tag, BannerFields, BannerId, Content, FeatureId, TagId};
use crate::database::{self, Database};

use super::{create, delete, list, update, user_banner, Error, ListFilter};

async fn test_database(features: &[FeatureId]) -> Option<Database> {
	let url = match std::env::var("BANNERS_TEST_DATABASE_URL") {
		Ok(url) => url,
		Err(_) => {
			eprintln!("BANNERS_TEST_DATABASE_URL is not set, skipping");
			return None;
		}
	};
	let database = database::connect(&url, 2)
		.await
		.expect("connecting to test database");

	// leftovers from an earlier run; tags cascade with their banners
	sqlx::query("DELETE FROM banners WHERE feature_id = ANY($1)")
		.bind(features)
		.execute(&database)
		.await
		.expect("clearing previous rows");

	Some(database)
}

fn fields(feature_id: FeatureId, tag_ids: &[TagId], is_active: bool) -> BannerFields {
	BannerFields {
		tag_ids: tag_ids.iter().copied().collect(),
		feature_id,
		content: Content {
			title: "A".into(),
			text: "B".into(),
			url: "C".into(),
		},
		is_active,
	}
}

async fn banners_with_feature(database: &Database, feature_id: FeatureId) -> i64 {
	sqlx::query_scalar::<_, i64>("SELECT count(*) FROM banners WHERE feature_id = $1")
		.bind(feature_id)
		.fetch_one(database)
		.await
		.unwrap()
}

async fn rows_with_tag(database: &Database, tag_id: TagId) -> i64 {
	sqlx::query_scalar::<_, i64>("SELECT count(*) FROM banner_tags WHERE tag_id = $1")
		.bind(tag_id)
		.fetch_one(database)
		.await
		.unwrap()
}

async fn tags_of(database: &Database, banner_id: BannerId) -> BTreeSet<TagId> {
	banner_tag::tag_ids_for(database, banner_id)
		.await
		.unwrap()
		.into_iter()
		.collect()
}

#[tokio::test]
async fn scenario() {
	let feature = 9001;
	let Some(database) = test_database(&[feature]).await else { return };

	let id = create(&database, &fields(feature, &[900_101, 900_102], true))
		.await
		.unwrap();
	assert_eq!(
		user_banner(&database, feature, 900_101).await.unwrap(),
		Content {
			title: "A".into(),
			text: "B".into(),
			url: "C".into(),
		}
	);

	update(&database, id, &fields(feature, &[900_102], false))
		.await
		.unwrap();
	// tag no longer associated
	assert!(matches!(
		user_banner(&database, feature, 900_101).await,
		Err(Error::NotFound)
	));
	// inactive
	assert!(matches!(
		user_banner(&database, feature, 900_102).await,
		Err(Error::NotFound)
	));

	delete(&database, id).await.unwrap();
	assert!(matches!(delete(&database, id).await, Err(Error::NotFound)));
}

#[tokio::test]
async fn failed_tag_insert_leaves_nothing_behind() {
	let feature = 9002;
	let Some(database) = test_database(&[feature]).await else { return };

	// the schema rejects non-positive tag ids, after the banner row is already inserted
	let result = create(&database, &fields(feature, &[900_201, -1], true)).await;

	assert!(matches!(result, Err(Error::Sqlx(_))));
	assert_eq!(banners_with_feature(&database, feature).await, 0);
	assert_eq!(rows_with_tag(&database, 900_201).await, 0);
}

#[tokio::test]
async fn create_without_tags() {
	let feature = 9003;
	let Some(database) = test_database(&[feature]).await else { return };

	let id = create(&database, &fields(feature, &[], true)).await.unwrap();

	let listed = list(
		&database,
		&ListFilter {
			feature_id: feature,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert_eq!(listed.len(), 1);
	assert_eq!(listed[0].banner_id, id);
	assert!(listed[0].tag_ids.is_empty());
}

#[tokio::test]
async fn update_replaces_tags_wholesale() {
	let feature = 9004;
	let Some(database) = test_database(&[feature]).await else { return };

	let id = create(&database, &fields(feature, &[900_401, 900_402, 900_403], true))
		.await
		.unwrap();
	update(&database, id, &fields(feature, &[900_403, 900_404], true))
		.await
		.unwrap();

	assert_eq!(
		tags_of(&database, id).await,
		BTreeSet::from([900_403, 900_404])
	);

	update(&database, id, &fields(feature, &[], true))
		.await
		.unwrap();
	assert!(tags_of(&database, id).await.is_empty());
}

#[tokio::test]
async fn failed_update_keeps_previous_state() {
	let feature = 9005;
	let Some(database) = test_database(&[feature]).await else { return };

	let id = create(&database, &fields(feature, &[900_501], true))
		.await
		.unwrap();

	let mut changed = fields(feature, &[900_502, -5], false);
	changed.content.title = "changed".into();
	let result = update(&database, id, &changed).await;
	assert!(matches!(result, Err(Error::Sqlx(_))));

	let listed = list(
		&database,
		&ListFilter {
			feature_id: feature,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert_eq!(listed.len(), 1);
	assert_eq!(listed[0].content.title, "A");
	assert!(listed[0].is_active);
	assert_eq!(listed[0].tag_ids, vec![900_501]);
}

#[tokio::test]
async fn update_missing_banner() {
	let feature = 9006;
	let Some(database) = test_database(&[feature]).await else { return };

	let id = create(&database, &fields(feature, &[900_601], true))
		.await
		.unwrap();
	delete(&database, id).await.unwrap();

	let result = update(&database, id, &fields(feature, &[900_602], true)).await;
	assert!(matches!(result, Err(Error::NotFound)));
	assert_eq!(rows_with_tag(&database, 900_602).await, 0);
}

#[tokio::test]
async fn delete_cascades_tags() {
	let feature = 9007;
	let Some(database) = test_database(&[feature]).await else { return };

	let id = create(&database, &fields(feature, &[900_701, 900_702], true))
		.await
		.unwrap();
	delete(&database, id).await.unwrap();

	assert_eq!(rows_with_tag(&database, 900_701).await, 0);
	assert_eq!(rows_with_tag(&database, 900_702).await, 0);
	assert!(matches!(
		user_banner(&database, feature, 900_701).await,
		Err(Error::NotFound)
	));
	let listed = list(
		&database,
		&ListFilter {
			tag_id: 900_701,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert!(listed.is_empty());
}

#[tokio::test]
async fn inactive_banners_are_listed_but_not_served() {
	let feature = 9008;
	let Some(database) = test_database(&[feature]).await else { return };

	let id = create(&database, &fields(feature, &[900_801], false))
		.await
		.unwrap();

	assert!(matches!(
		user_banner(&database, feature, 900_801).await,
		Err(Error::NotFound)
	));
	let listed = list(
		&database,
		&ListFilter {
			feature_id: feature,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert_eq!(listed.len(), 1);
	assert_eq!(listed[0].banner_id, id);
	assert!(!listed[0].is_active);
}

#[tokio::test]
async fn filters_compose() {
	let feature = 9009;
	let other_feature = 9010;
	let Some(database) = test_database(&[feature, other_feature]).await else { return };

	let a = create(&database, &fields(feature, &[900_901, 900_902], true))
		.await
		.unwrap();
	let b = create(&database, &fields(feature, &[900_902], true))
		.await
		.unwrap();
	let c = create(&database, &fields(other_feature, &[900_901], true))
		.await
		.unwrap();

	let ids = |views: Vec<crate::database::models::BannerView>| {
		views
			.into_iter()
			.map(|view| view.banner_id)
			.collect::<Vec<_>>()
	};

	let both = list(
		&database,
		&ListFilter {
			feature_id: feature,
			tag_id: 900_901,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert_eq!(ids(both), vec![a]);

	let by_feature = list(
		&database,
		&ListFilter {
			feature_id: feature,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert_eq!(ids(by_feature), vec![a, b]);

	let by_tag = list(
		&database,
		&ListFilter {
			tag_id: 900_901,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert_eq!(ids(by_tag), vec![a, c]);

	let listed = list(
		&database,
		&ListFilter {
			feature_id: feature,
			tag_id: 900_902,
			..ListFilter::default()
		},
	)
	.await
	.unwrap();
	assert_eq!(listed[0].tag_ids, vec![900_901, 900_902]);
	assert_eq!(listed[1].tag_ids, vec![900_902]);
}

#[tokio::test]
async fn pagination_windows_results() {
	let feature = 9011;
	let Some(database) = test_database(&[feature]).await else { return };

	let mut ids = Vec::new();
	for tag in 901_101..901_106 {
		ids.push(
			create(&database, &fields(feature, &[tag], true))
				.await
				.unwrap(),
		);
	}

	let page = |limit, offset| ListFilter {
		feature_id: feature,
		tag_id: 0,
		limit,
		offset,
	};
	let listed = |filter: ListFilter| {
		let database = &database;
		async move {
			list(database, &filter)
				.await
				.unwrap()
				.into_iter()
				.map(|view| view.banner_id)
				.collect::<Vec<_>>()
		}
	};

	assert_eq!(listed(page(0, 0)).await, ids);
	assert_eq!(listed(page(2, 0)).await, ids[..2]);
	assert_eq!(listed(page(2, 2)).await, ids[2..4]);
	assert_eq!(listed(page(0, 3)).await, ids[3..]);
	assert!(listed(page(2, 10)).await.is_empty());
}

#[tokio::test]
async fn tag_sets_beyond_the_bind_limit() {
	let feature = 9012;
	let Some(database) = test_database(&[feature]).await else { return };

	// more than u16::MAX / 2 tags, which would overflow a two-binds-per-row insert
	let many: Vec<TagId> = (2_000_001..=2_040_000).collect();
	let id = create(&database, &fields(feature, &many, true))
		.await
		.unwrap();
	assert_eq!(tags_of(&database, id).await.len(), many.len());

	let fewer: Vec<TagId> = (2_000_001..=2_035_000).collect();
	update(&database, id, &fields(feature, &fewer, true))
		.await
		.unwrap();
	assert_eq!(
		tags_of(&database, id).await,
		fewer.into_iter().collect::<BTreeSet<_>>()
	);
}
