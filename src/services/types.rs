use serde::{Deserialize, Serialize};
use std::fmt;

use crate::db::connection::DbConnection;
use crate::models::Connection;

/// Raw caller arguments for `add` and `update`. A connection is described by
/// either `conn_uri` or by `conn_type` plus the discrete fields, never both;
/// validation happens in the service, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub conn_id: Option<String>,
    pub conn_uri: Option<String>,
    pub conn_type: Option<String>,
    pub host: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub schema: Option<String>,
    pub port: Option<i32>,
    pub extra: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionResponse {
    pub id: String,
    pub connection: Connection,
}

impl From<DbConnection> for ConnectionResponse {
    fn from(row: DbConnection) -> Self {
        let id = row.id.clone();
        Self {
            id,
            connection: row.into(),
        }
    }
}

/// Result of a `delete` call. Ambiguous matches are not an error here: the
/// caller resolves them by passing `delete_all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteOutcome {
    NotFound { conn_id: String },
    Deleted { conn_id: String },
    DeletedAll { conn_id: String, count: usize },
    RequiresDeleteAll { conn_id: String, count: usize },
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::NotFound { conn_id } => {
                write!(f, "did not find a connection with conn_id={conn_id}")
            }
            DeleteOutcome::Deleted { conn_id } => {
                write!(f, "successfully deleted connection with conn_id={conn_id}")
            }
            DeleteOutcome::DeletedAll { conn_id, count } => {
                write!(
                    f,
                    "successfully deleted {count} connections with conn_id={conn_id}"
                )
            }
            DeleteOutcome::RequiresDeleteAll { conn_id, count } => {
                write!(
                    f,
                    "found {count} connections with conn_id={conn_id}, specify delete_all to remove them all"
                )
            }
        }
    }
}
