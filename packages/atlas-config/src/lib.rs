mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Search, Semantic, Service};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw =
		fs::read_to_string(path).map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config =
		toml::from_str(&raw).map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::validation("service.http_bind must be a socket address."));
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::validation("service.log_level must be non-empty."));
	}
	if cfg.search.max_results == 0 {
		return Err(Error::validation("search.max_results must be greater than zero."));
	}

	validate_semantic(&cfg.semantic)
}

fn validate_semantic(semantic: &types::Semantic) -> Result<()> {
	if !semantic.enabled {
		return Ok(());
	}
	if semantic.api_base.trim().is_empty() {
		return Err(Error::validation("semantic.api_base must be non-empty."));
	}
	if !semantic.api_base.starts_with("http://") && !semantic.api_base.starts_with("https://") {
		return Err(Error::validation("semantic.api_base must start with http:// or https://."));
	}
	if !semantic.path.starts_with('/') {
		return Err(Error::validation("semantic.path must start with '/'."));
	}
	if semantic.top == 0 {
		return Err(Error::validation("semantic.top must be greater than zero."));
	}
	if !semantic.threshold.is_finite() {
		return Err(Error::validation("semantic.threshold must be a finite number."));
	}
	if !(0.0..=1.0).contains(&semantic.threshold) {
		return Err(Error::validation("semantic.threshold must be in the range 0.0-1.0."));
	}
	if semantic.timeout_ms == Some(0) {
		return Err(Error::validation("semantic.timeout_ms must be greater than zero when set."));
	}

	for (key, value) in &semantic.default_headers {
		if !value.is_string() {
			return Err(Error::validation(format!(
				"semantic.default_headers.{key} must be a string."
			)));
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.catalog
		.path
		.as_deref()
		.and_then(Path::to_str)
		.map(|path| path.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.catalog.path = None;
	}

	let trimmed = cfg.semantic.api_base.trim_end_matches('/').len();

	cfg.semantic.api_base.truncate(trimmed);
}
