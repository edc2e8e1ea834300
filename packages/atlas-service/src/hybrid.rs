use serde::{Deserialize, Serialize};

use atlas_domain::{CatalogStore, Record, RecordKind, TaskKind};
use atlas_providers::SemanticMatch;

use crate::{
	AtlasService, SearchHit,
	semantic::{SemanticSession, SessionOutcome},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticHit {
	pub kind: RecordKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub task_kind: Option<TaskKind>,
	pub id: String,
	pub name: String,
	pub summary: String,
	pub similarity: f32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub match_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "items", rename_all = "snake_case")]
pub enum HybridResults {
	Semantic(Vec<SemanticHit>),
	Lexical(Vec<SearchHit>),
}
impl HybridResults {
	pub fn len(&self) -> usize {
		match self {
			Self::Semantic(items) => items.len(),
			Self::Lexical(items) => items.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl AtlasService {
	/// Semantic matches resolved against the catalog, or lexical results when none resolve.
	pub async fn search_hybrid(&self, query: &str, limit: Option<usize>) -> HybridResults {
		let matches = match self.semantic.as_ref() {
			Some(provider) => provider.search(query).await,
			None => Vec::new(),
		};

		self.merge_hybrid(query, &matches, limit)
	}

	/// Same as [`AtlasService::search_hybrid`], through a latest-wins session. Returns `None`
	/// when a newer search from the same session made this one stale.
	pub async fn search_hybrid_in(
		&self,
		session: &SemanticSession,
		query: &str,
		limit: Option<usize>,
	) -> Option<HybridResults> {
		match session.search(query).await {
			SessionOutcome::Fresh(matches) => Some(self.merge_hybrid(query, &matches, limit)),
			SessionOutcome::Superseded => None,
		}
	}

	fn merge_hybrid(
		&self,
		query: &str,
		matches: &[SemanticMatch],
		limit: Option<usize>,
	) -> HybridResults {
		let limit = self.effective_limit(limit);
		let resolved: Vec<_> = matches
			.iter()
			.filter_map(|semantic| resolve_match(&self.catalog, semantic))
			.take(limit)
			.collect();

		if resolved.is_empty() {
			return HybridResults::Lexical(self.search_all(query, Some(limit)));
		}

		HybridResults::Semantic(resolved)
	}
}

fn resolve_match(store: &CatalogStore, semantic: &SemanticMatch) -> Option<SemanticHit> {
	let Some(kind) = resolve_kind(&semantic.record_type) else {
		tracing::debug!(
			id = %semantic.id,
			record_type = %semantic.record_type,
			"Dropping semantic match with unknown type."
		);

		return None;
	};
	let Some(record) = store.get(kind, &semantic.id) else {
		tracing::debug!(id = %semantic.id, %kind, "Dropping semantic match missing from catalog.");

		return None;
	};

	Some(semantic_hit(record, semantic))
}

/// Accepts record kinds ("task", "data-artifact") and task sub-kinds ("ai", "human-task").
fn resolve_kind(raw: &str) -> Option<RecordKind> {
	if let Ok(kind) = raw.parse::<RecordKind>() {
		return Some(kind);
	}

	let lowered = raw.trim().to_ascii_lowercase();
	let base = lowered.trim_end_matches("-task").trim_end_matches("_task");

	base.parse::<TaskKind>().ok().map(|_| RecordKind::Task)
}

fn semantic_hit(record: &Record, semantic: &SemanticMatch) -> SemanticHit {
	SemanticHit {
		kind: record.kind(),
		task_kind: record.task_kind(),
		id: record.id().to_string(),
		name: record.name().to_string(),
		summary: record.summary().to_string(),
		similarity: semantic.similarity,
		match_reason: semantic.match_reason.clone(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_kind_aliases() {
		assert_eq!(resolve_kind("task"), Some(RecordKind::Task));
		assert_eq!(resolve_kind("ai"), Some(RecordKind::Task));
		assert_eq!(resolve_kind("human-task"), Some(RecordKind::Task));
		assert_eq!(resolve_kind("System_Task"), Some(RecordKind::Task));
		assert_eq!(resolve_kind("data-artifact"), Some(RecordKind::DataArtifact));
		assert_eq!(resolve_kind("touchpoint"), Some(RecordKind::Touchpoint));
		assert_eq!(resolve_kind("workflow"), None);
	}

	#[test]
	fn hybrid_results_serialize_with_source_tag() {
		let value = serde_json::to_value(HybridResults::Lexical(Vec::new()))
			.expect("Results must serialize.");

		assert_eq!(value, serde_json::json!({ "source": "lexical", "items": [] }));
	}
}
