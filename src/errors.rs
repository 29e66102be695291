use thiserror::Error;

/// Argument validation failure, carrying the offending field names in the
/// order they were checked so callers can assert on or render them directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("the following arguments are required: {}", .0.join(", "))]
    Required(Vec<String>),
    #[error("the following arguments are not compatible with conn_uri: {}", .0.join(", "))]
    IncompatibleWithUri(Vec<String>),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    MissingArgument(#[from] ArgumentError),
    #[error("did not find a connection with conn_id={0}")]
    ConnectionNotFound(String),
    #[error("updating multiple connections is not supported, found {count} connections with conn_id={conn_id}")]
    MultipleConnectionsFound { conn_id: String, count: usize },
    #[error("failed to parse conn_uri: {0}")]
    InvalidUri(#[from] url::ParseError),
    #[error("storage error: {0}")]
    Storage(#[from] diesel::result::Error),
    #[error("database pool error: {0}")]
    Pool(#[from] r2d2::Error),
}
