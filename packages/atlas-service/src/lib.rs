pub mod hybrid;
pub mod search;
pub mod semantic;

mod error;

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use atlas_config::Config;
use atlas_domain::{CatalogStore, Record, RecordKind, TaskKind};
use atlas_providers::SemanticClient;

pub use error::{Error, Result};
pub use hybrid::{HybridResults, SemanticHit};
pub use search::{ScoredRecord, SearchHit, score_record, tokenize_query};
pub use semantic::{SemanticProvider, SemanticSession, SessionOutcome};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub struct AtlasService {
	pub cfg: Config,
	pub catalog: Arc<CatalogStore>,
	pub semantic: Option<Arc<dyn SemanticProvider>>,
}
impl AtlasService {
	/// Builds the service with the HTTP semantic client when `[semantic]` is enabled.
	pub fn new(cfg: Config, catalog: Arc<CatalogStore>) -> Result<Self> {
		let semantic = if cfg.semantic.enabled {
			let client = SemanticClient::new(&cfg.semantic)?;

			tracing::info!(endpoint = %client.endpoint(), "Semantic search enabled.");

			Some(Arc::new(client) as Arc<dyn SemanticProvider>)
		} else {
			None
		};

		Ok(Self { cfg, catalog, semantic })
	}

	pub fn with_semantic(
		cfg: Config,
		catalog: Arc<CatalogStore>,
		semantic: Option<Arc<dyn SemanticProvider>>,
	) -> Self {
		Self { cfg, catalog, semantic }
	}

	/// Task search, optionally restricted to one sub-kind.
	pub fn search_tasks(&self, query: &str, kind: Option<TaskKind>) -> Vec<SearchHit> {
		let tokens = tokenize_query(query);
		let scored = match kind {
			Some(kind) => search::search_records(self.catalog.tasks_of(kind), &tokens),
			None => search::search_records(self.catalog.records(RecordKind::Task), &tokens),
		};

		scored.into_iter().map(SearchHit::from).collect()
	}

	pub fn search_kind(&self, kind: RecordKind, query: &str) -> Vec<SearchHit> {
		let tokens = tokenize_query(query);

		search::search_records(self.catalog.records(kind), &tokens)
			.into_iter()
			.map(SearchHit::from)
			.collect()
	}

	/// Unified search across every kind, truncated to `limit` (capped by `search.max_results`).
	pub fn search_all(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit> {
		let tokens = tokenize_query(query);

		search::search_all(&self.catalog, &tokens)
			.into_iter()
			.take(self.effective_limit(limit))
			.map(SearchHit::from)
			.collect()
	}

	/// A fresh latest-wins session for one interactive client, or `None` without a provider.
	pub fn semantic_session(&self) -> Option<SemanticSession> {
		let provider = self.semantic.clone()?;

		Some(SemanticSession::new(provider, Duration::from_millis(self.cfg.semantic.debounce_ms)))
	}

	pub fn record(&self, kind: RecordKind, id: &str) -> Result<&Record> {
		self.catalog
			.get(kind, id)
			.ok_or_else(|| Error::NotFound { message: format!("No {kind} with id {id}.") })
	}

	pub(crate) fn effective_limit(&self, limit: Option<usize>) -> usize {
		let max = self.cfg.search.max_results as usize;

		limit.unwrap_or(max).min(max)
	}
}
