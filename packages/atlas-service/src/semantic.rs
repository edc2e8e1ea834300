use std::{
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
	time::Duration,
};

use atlas_providers::{SemanticClient, SemanticMatch};

use crate::BoxFuture;

pub trait SemanticProvider
where
	Self: Send + Sync,
{
	/// Returns ranked matches. Implementations degrade failures to an empty list.
	fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Vec<SemanticMatch>>;
}

impl SemanticProvider for SemanticClient {
	fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Vec<SemanticMatch>> {
		Box::pin(SemanticClient::search(self, query))
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
	Fresh(Vec<SemanticMatch>),
	/// A newer request was issued before this one completed.
	Superseded,
}

/// Debounced, latest-wins access to a semantic provider for one interactive client.
///
/// Every call takes the next sequence number. A call whose number is no longer the latest,
/// after the debounce delay or after the response arrives, is reported as superseded and its
/// response is dropped.
pub struct SemanticSession {
	provider: Arc<dyn SemanticProvider>,
	debounce: Duration,
	latest: AtomicU64,
}
impl SemanticSession {
	pub fn new(provider: Arc<dyn SemanticProvider>, debounce: Duration) -> Self {
		Self { provider, debounce, latest: AtomicU64::new(0) }
	}

	pub async fn search(&self, query: &str) -> SessionOutcome {
		let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

		if !self.debounce.is_zero() {
			tokio::time::sleep(self.debounce).await;

			if !self.is_latest(seq) {
				return SessionOutcome::Superseded;
			}
		}

		let results = self.provider.search(query).await;

		if !self.is_latest(seq) {
			tracing::debug!(
				seq,
				latest = self.latest_sequence(),
				"Dropping stale semantic response."
			);

			return SessionOutcome::Superseded;
		}

		SessionOutcome::Fresh(results)
	}

	pub fn latest_sequence(&self) -> u64 {
		self.latest.load(Ordering::SeqCst)
	}

	fn is_latest(&self, seq: u64) -> bool {
		self.latest.load(Ordering::SeqCst) == seq
	}
}
