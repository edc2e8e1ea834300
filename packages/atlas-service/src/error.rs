pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Catalog error: {message}")]
	Catalog { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
}
impl From<atlas_domain::Error> for Error {
	fn from(err: atlas_domain::Error) -> Self {
		Self::Catalog { message: err.to_string() }
	}
}

impl From<atlas_domain::UnknownKind> for Error {
	fn from(err: atlas_domain::UnknownKind) -> Self {
		Self::InvalidRequest { message: err.to_string() }
	}
}

impl From<atlas_providers::Error> for Error {
	fn from(err: atlas_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}
