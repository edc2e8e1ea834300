use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One ranked hit from the remote embedding search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatch {
	pub id: String,
	#[serde(rename = "type")]
	pub record_type: String,
	#[serde(default)]
	pub name: String,
	pub similarity: f32,
	#[serde(rename = "matchReason", default, skip_serializing_if = "Option::is_none")]
	pub match_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SemanticResponse {
	#[serde(default)]
	results: Vec<SemanticMatch>,
}

#[derive(Debug, Clone)]
pub struct SemanticClient {
	http: Client,
	endpoint: String,
	top: u32,
	threshold: f32,
}
impl SemanticClient {
	pub fn new(cfg: &atlas_config::Semantic) -> Result<Self> {
		let headers = crate::default_headers(&cfg.default_headers)?;
		let mut builder = Client::builder().default_headers(headers);

		if let Some(timeout_ms) = cfg.timeout_ms {
			builder = builder.timeout(Duration::from_millis(timeout_ms));
		}

		Ok(Self {
			http: builder.build()?,
			endpoint: format!("{}{}", cfg.api_base, cfg.path),
			top: cfg.top,
			threshold: cfg.threshold,
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Fetches semantic matches. Every failure is logged and yields an empty list.
	pub async fn search(&self, query: &str) -> Vec<SemanticMatch> {
		match self.try_search(query).await {
			Ok(results) => results,
			Err(err) => {
				tracing::warn!(
					error = %err,
					endpoint = %self.endpoint,
					"Semantic search failed. Returning no semantic results."
				);

				Vec::new()
			},
		}
	}

	pub async fn try_search(&self, query: &str) -> Result<Vec<SemanticMatch>> {
		let query = query.trim();

		if query.is_empty() {
			return Ok(Vec::new());
		}

		let top = self.top.to_string();
		let threshold = self.threshold.to_string();
		let res = self
			.http
			.get(&self.endpoint)
			.query(&[("q", query), ("top", top.as_str()), ("threshold", threshold.as_str())])
			.send()
			.await?;
		let status = res.status();

		if !status.is_success() {
			return Err(Error::Status { status: status.as_u16() });
		}

		let body: SemanticResponse = res.json().await?;

		Ok(body.results)
	}
}
