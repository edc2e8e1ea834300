use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub catalog: Catalog,
	#[serde(default)]
	pub search: Search,
	pub semantic: Semantic,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
	/// Optional. When absent the bundled sample catalog is used.
	pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Upper bound applied to the `limit` of unified searches.
	pub max_results: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self { max_results: 50 }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Semantic {
	#[serde(default = "default_semantic_enabled")]
	pub enabled: bool,
	pub api_base: String,
	#[serde(default = "default_semantic_path")]
	pub path: String,
	#[serde(default = "default_semantic_top")]
	pub top: u32,
	#[serde(default = "default_semantic_threshold")]
	pub threshold: f32,
	/// Optional. No timeout is applied when absent.
	pub timeout_ms: Option<u64>,
	#[serde(default = "default_semantic_debounce_ms")]
	pub debounce_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

fn default_semantic_enabled() -> bool {
	true
}

fn default_semantic_path() -> String {
	"/api/semantic-search".to_string()
}

fn default_semantic_top() -> u32 {
	10
}

fn default_semantic_threshold() -> f32 {
	0.3
}

fn default_semantic_debounce_ms() -> u64 {
	300
}
