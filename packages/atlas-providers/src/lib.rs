pub mod semantic;

mod error;

pub use error::{Error, Result};
pub use semantic::{SemanticClient, SemanticMatch};

use reqwest::header::{HeaderMap, HeaderName};
use serde_json::{Map, Value};

pub fn default_headers(headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut out = HeaderMap::new();

	for (key, value) in headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: format!("Default header {key} must be a string."),
			});
		};

		out.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(out)
}
