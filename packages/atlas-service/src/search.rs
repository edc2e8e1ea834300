mod rank;
mod score;
mod tokenize;

pub use rank::rank;
pub use score::{score_record, weights};
pub use tokenize::{STOP_WORDS, tokenize_query};

use serde::{Deserialize, Serialize};

use atlas_domain::{CatalogStore, Record, RecordKind, TaskKind};

/// A record paired with its relevance for one query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
	pub record: &'a Record,
	pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
	pub kind: RecordKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub task_kind: Option<TaskKind>,
	pub id: String,
	pub name: String,
	pub summary: String,
	pub score: u32,
}
impl From<ScoredRecord<'_>> for SearchHit {
	fn from(scored: ScoredRecord<'_>) -> Self {
		Self {
			kind: scored.record.kind(),
			task_kind: scored.record.task_kind(),
			id: scored.record.id().to_string(),
			name: scored.record.name().to_string(),
			summary: scored.record.summary().to_string(),
			score: scored.score,
		}
	}
}

/// Searches one table. With no tokens every record is returned, unscored, in table order.
pub fn search_records<'a, I>(records: I, tokens: &[String]) -> Vec<ScoredRecord<'a>>
where
	I: IntoIterator<Item = &'a Record>,
{
	if tokens.is_empty() {
		return records.into_iter().map(|record| ScoredRecord { record, score: 0 }).collect();
	}

	let mut scored: Vec<_> =
		records.into_iter().filter_map(|record| matched(record, tokens)).collect();

	rank(&mut scored);

	scored
}

/// Searches every table and merges the hits in kind order before ranking. With no tokens
/// nothing is returned.
pub fn search_all<'a>(store: &'a CatalogStore, tokens: &[String]) -> Vec<ScoredRecord<'a>> {
	if tokens.is_empty() {
		return Vec::new();
	}

	let mut merged = Vec::new();

	for kind in RecordKind::ALL {
		merged.extend(store.records(kind).iter().filter_map(|record| matched(record, tokens)));
	}

	rank(&mut merged);

	merged
}

fn matched<'a>(record: &'a Record, tokens: &[String]) -> Option<ScoredRecord<'a>> {
	let score = score_record(record, tokens);

	(score > 0).then_some(ScoredRecord { record, score })
}
