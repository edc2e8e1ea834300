pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to bind mock semantic server: {0}")]
	Bind(#[source] std::io::Error),
}
