use std::{
	collections::HashSet,
	path::{Path, PathBuf},
	sync::Arc,
};

use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::{
	Error, Result,
	record::{
		AiTask, Constraint, DataArtifact, HumanTask, Record, RecordKind, SystemTask, TaskKind,
		Touchpoint,
	},
};

const BUNDLED_CATALOG_JSON: &str = include_str!("../data/atlas.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
	#[serde(default)]
	tasks: Vec<TaskEntry>,
	#[serde(default)]
	data_artifacts: Vec<DataArtifact>,
	#[serde(default)]
	constraints: Vec<Constraint>,
	#[serde(default)]
	touchpoints: Vec<Touchpoint>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "task_type", rename_all = "snake_case")]
enum TaskEntry {
	Ai(AiTask),
	Human(HumanTask),
	System(SystemTask),
}
impl From<TaskEntry> for Record {
	fn from(entry: TaskEntry) -> Self {
		match entry {
			TaskEntry::Ai(task) => Self::AiTask(task),
			TaskEntry::Human(task) => Self::HumanTask(task),
			TaskEntry::System(task) => Self::SystemTask(task),
		}
	}
}

/// Read-only record tables. Table order is the order records appear in the catalog.
#[derive(Debug)]
pub struct CatalogStore {
	tasks: Vec<Record>,
	data_artifacts: Vec<Record>,
	constraints: Vec<Record>,
	touchpoints: Vec<Record>,
}
impl CatalogStore {
	pub fn bundled() -> Result<Self> {
		Self::from_json(BUNDLED_CATALOG_JSON, "bundled")
	}

	pub fn from_json(raw: &str, origin: &str) -> Result<Self> {
		let file: CatalogFile = serde_json::from_str(raw)
			.map_err(|err| Error::ParseCatalog { origin: origin.to_string(), source: err })?;
		let store = Self {
			tasks: file.tasks.into_iter().map(Record::from).collect(),
			data_artifacts: file.data_artifacts.into_iter().map(Record::DataArtifact).collect(),
			constraints: file.constraints.into_iter().map(Record::Constraint).collect(),
			touchpoints: file.touchpoints.into_iter().map(Record::Touchpoint).collect(),
		};

		store.validate()?;

		Ok(store)
	}

	/// Loads the catalog at `path`, or the bundled sample when no path is given.
	pub async fn load(path: Option<&Path>) -> Result<Self> {
		let Some(path) = path else { return Self::bundled() };
		let raw = tokio::fs::read_to_string(path)
			.await
			.map_err(|err| Error::ReadCatalog { path: path.to_path_buf(), source: err })?;

		Self::from_json(&raw, &path.display().to_string())
	}

	pub fn records(&self, kind: RecordKind) -> &[Record] {
		match kind {
			RecordKind::Task => &self.tasks,
			RecordKind::DataArtifact => &self.data_artifacts,
			RecordKind::Constraint => &self.constraints,
			RecordKind::Touchpoint => &self.touchpoints,
		}
	}

	pub fn tasks_of(&self, kind: TaskKind) -> impl Iterator<Item = &Record> {
		self.tasks.iter().filter(move |record| record.task_kind() == Some(kind))
	}

	pub fn get(&self, kind: RecordKind, id: &str) -> Option<&Record> {
		self.records(kind).iter().find(|record| record.id() == id)
	}

	pub fn len(&self) -> usize {
		RecordKind::ALL.iter().map(|kind| self.records(*kind).len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn validate(&self) -> Result<()> {
		for kind in RecordKind::ALL {
			let mut seen = HashSet::new();

			for record in self.records(kind) {
				if record.id().trim().is_empty() {
					return Err(Error::InvalidCatalog {
						message: format!("{kind} entries must have a non-empty id."),
					});
				}
				if record.name().trim().is_empty() {
					return Err(Error::InvalidCatalog {
						message: format!("{kind} {} must have a non-empty name.", record.id()),
					});
				}
				if !seen.insert(record.id()) {
					return Err(Error::InvalidCatalog {
						message: format!("Duplicate {kind} id {}.", record.id()),
					});
				}
			}
		}

		Ok(())
	}
}

/// A catalog that is loaded on first use. Concurrent callers await the same load.
#[derive(Debug)]
pub struct SharedCatalog {
	source: Option<PathBuf>,
	cell: OnceCell<Arc<CatalogStore>>,
}
impl SharedCatalog {
	pub fn new(source: Option<PathBuf>) -> Self {
		Self { source, cell: OnceCell::new() }
	}

	pub fn preloaded(store: CatalogStore) -> Self {
		Self { source: None, cell: OnceCell::new_with(Some(Arc::new(store))) }
	}

	pub async fn ensure_loaded(&self) -> Result<Arc<CatalogStore>> {
		let store = self
			.cell
			.get_or_try_init(|| async {
				let store = CatalogStore::load(self.source.as_deref()).await?;

				tracing::info!(records = store.len(), source = ?self.source, "Catalog loaded.");

				Ok::<_, Error>(Arc::new(store))
			})
			.await?;

		Ok(store.clone())
	}

	pub fn get(&self) -> Option<Arc<CatalogStore>> {
		self.cell.get().cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_catalog_is_valid() {
		let store = CatalogStore::bundled().expect("Bundled catalog must load.");

		assert!(!store.is_empty());

		for kind in RecordKind::ALL {
			assert!(!store.records(kind).is_empty(), "Bundled catalog has no {kind} records.");
		}
	}

	#[test]
	fn task_entries_keep_their_sub_kind() {
		let raw = r#"{
			"tasks": [
				{ "task_type": "human", "id": "h", "name": "H", "short_description": "d", "usage_example": null },
				{ "task_type": "ai", "id": "a", "name": "A", "short_description": "d", "usage_example": null }
			]
		}"#;
		let store = CatalogStore::from_json(raw, "inline").expect("Catalog must parse.");
		let kinds: Vec<_> =
			store.records(RecordKind::Task).iter().filter_map(Record::task_kind).collect();

		assert_eq!(kinds, vec![TaskKind::Human, TaskKind::Ai]);
		assert_eq!(store.tasks_of(TaskKind::Ai).count(), 1);
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let raw = r#"{
			"constraints": [
				{ "id": "c", "name": "One", "description": "d", "usage_example": null, "category": null },
				{ "id": "c", "name": "Two", "description": "d", "usage_example": null, "category": null }
			]
		}"#;
		let err = CatalogStore::from_json(raw, "inline").expect_err("Expected duplicate id error.");

		assert!(err.to_string().contains("Duplicate constraint id c."), "Unexpected error: {err}");
	}

	#[test]
	fn unknown_task_type_is_a_parse_error() {
		let raw = r#"{ "tasks": [ { "task_type": "robot", "id": "r", "name": "R", "short_description": "d" } ] }"#;
		let err = CatalogStore::from_json(raw, "inline").expect_err("Expected parse error.");

		assert!(matches!(err, Error::ParseCatalog { .. }), "Unexpected error: {err:?}");
	}
}
