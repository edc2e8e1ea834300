use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read catalog at {path:?}.")]
	ReadCatalog { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse catalog {origin}.")]
	ParseCatalog { origin: String, source: serde_json::Error },
	#[error("Invalid catalog: {message}")]
	InvalidCatalog { message: String },
}
