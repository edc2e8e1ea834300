use std::{env, fs, path::PathBuf, sync::Arc};

use atlas_domain::{CatalogStore, Error, Record, RecordKind, SharedCatalog, TaskKind};

fn temp_catalog_path(label: &str) -> PathBuf {
	env::temp_dir().join(format!("atlas_domain_test_{label}_{}.json", std::process::id()))
}

#[test]
fn lookup_by_kind_and_id() {
	let store = CatalogStore::bundled().expect("Bundled catalog must load.");
	let record =
		store.get(RecordKind::Task, "review-approve").expect("Expected review-approve task.");

	assert_eq!(record.name(), "Review & Approve");
	assert_eq!(record.kind(), RecordKind::Task);
	assert_eq!(record.task_kind(), Some(TaskKind::Human));
	assert!(store.get(RecordKind::Constraint, "review-approve").is_none());
}

#[test]
fn records_keep_table_order() {
	let store = CatalogStore::bundled().expect("Bundled catalog must load.");
	let ids: Vec<_> = store.records(RecordKind::Touchpoint).iter().map(Record::id).collect();

	assert_eq!(ids, vec!["chat-panel", "email-digest"]);
}

#[test]
fn records_serialize_with_type_tag() {
	let store = CatalogStore::bundled().expect("Bundled catalog must load.");
	let record = store.get(RecordKind::DataArtifact, "summary-text").expect("Expected artifact.");
	let value = serde_json::to_value(record).expect("Record must serialize.");

	assert_eq!(value["record_type"], "data_artifact");
	assert_eq!(value["name"], "Summary");
}

#[tokio::test]
async fn loads_catalog_from_file() {
	let path = temp_catalog_path("load");

	fs::write(
		&path,
		r#"{ "touchpoints": [ { "id": "kiosk", "name": "Kiosk", "description": "In-store screen.", "channels": ["retail"] } ] }"#,
	)
	.expect("Failed to write test catalog.");

	let result = CatalogStore::load(Some(&path)).await;

	fs::remove_file(&path).expect("Failed to remove test catalog.");

	let store = result.expect("Catalog file must load.");

	assert_eq!(store.len(), 1);
	assert!(store.records(RecordKind::Task).is_empty());
	assert_eq!(store.records(RecordKind::Touchpoint)[0].id(), "kiosk");
}

#[tokio::test]
async fn missing_catalog_file_is_a_read_error() {
	let path = temp_catalog_path("missing");
	let err = CatalogStore::load(Some(&path)).await.expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadCatalog { .. }), "Unexpected error: {err:?}");
}

#[tokio::test]
async fn shared_catalog_loads_once() {
	let shared = Arc::new(SharedCatalog::new(None));

	assert!(shared.get().is_none());

	let (first, second) = tokio::join!(shared.ensure_loaded(), shared.ensure_loaded());
	let first = first.expect("First load must succeed.");
	let second = second.expect("Second load must succeed.");

	assert!(Arc::ptr_eq(&first, &second));
	assert!(shared.get().is_some());
}

#[tokio::test]
async fn preloaded_catalog_skips_loading() {
	let store = CatalogStore::from_json("{}", "inline").expect("Empty catalog must parse.");
	let shared = SharedCatalog::preloaded(store);
	let loaded = shared.ensure_loaded().await.expect("Preloaded catalog must be available.");

	assert!(loaded.is_empty());
}
