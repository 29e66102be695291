use super::schema::connections;
use crate::models;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A stored connection row. `id` is a generated surrogate key; `conn_id` is
/// the caller-facing identifier and carries no uniqueness constraint.
#[derive(Identifiable, Queryable, PartialEq, Eq, Debug, Clone, Serialize, Deserialize, Default)]
#[diesel(table_name = connections)]
pub struct DbConnection {
    pub(crate) id: String,
    pub(crate) conn_id: String,
    pub(crate) conn_type: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) login: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) schema: Option<String>,
    pub(crate) port: Option<i32>,
    pub(crate) extra: Option<String>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

#[derive(Insertable, AsChangeset, PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = connections)]
pub struct NewConnection {
    pub(crate) id: String,
    pub(crate) conn_id: String,
    pub(crate) conn_type: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) login: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) schema: Option<String>,
    pub(crate) port: Option<i32>,
    pub(crate) extra: Option<String>,
}

impl NewConnection {
    pub fn from(connection: models::Connection, id: String) -> Self {
        NewConnection {
            id,
            conn_id: connection.conn_id,
            conn_type: connection.conn_type,
            host: connection.host,
            login: connection.login,
            password: connection.password,
            schema: connection.schema,
            port: connection.port,
            extra: connection.extra,
        }
    }
}

impl From<DbConnection> for models::Connection {
    fn from(item: DbConnection) -> Self {
        models::Connection {
            conn_id: item.conn_id,
            conn_type: item.conn_type,
            host: item.host,
            login: item.login,
            password: item.password,
            schema: item.schema,
            port: item.port,
            extra: item.extra,
        }
    }
}
