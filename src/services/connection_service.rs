use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use log::{debug, error};

use crate::{
    db::{
        connection::{DbConnection, NewConnection},
        pool::DbPool,
        schema::connections::dsl,
    },
    errors::{ArgumentError, RegistryError},
    models::Connection,
};

use super::types::{ConnectionRequest, ConnectionResponse, DeleteOutcome};

pub struct ConnectionService {
    db_pool: DbPool,
}

impl ConnectionService {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }
}

impl ConnectionService {
    /// Persists a new connection described by the request. Duplicate
    /// `conn_id`s are allowed; no uniqueness pre-check is made.
    pub fn add(&self, request: ConnectionRequest) -> Result<ConnectionResponse, RegistryError> {
        validate_request(&request)?;
        let connection = build_connection(&request)?;

        let generated_id = uuid::Uuid::new_v4().to_string();
        let new_connection = NewConnection::from(connection, generated_id.clone());

        let mut db = self.db_pool.get()?;
        diesel::insert_into(dsl::connections)
            .values(&new_connection)
            .execute(&mut db)?;

        let stored: DbConnection = dsl::connections.find(&generated_id).first(&mut db)?;
        debug!("added connection conn_id={}", stored.conn_id);
        Ok(ConnectionResponse::from(stored))
    }

    /// Deletes the connection(s) matching `conn_id`. A single match is
    /// deleted outright; multiple matches are deleted only when `delete_all`
    /// is set, otherwise nothing is removed and the outcome reports the
    /// count. A missing match is an outcome, not an error.
    pub fn delete(
        &self,
        conn_id: Option<String>,
        delete_all: bool,
    ) -> Result<DeleteOutcome, RegistryError> {
        let input_id = match conn_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                return Err(RegistryError::MissingArgument(ArgumentError::Required(
                    vec!["conn_id".to_owned()],
                )))
            }
        };

        let mut db = self.db_pool.get()?;
        let matches: Vec<DbConnection> = dsl::connections
            .filter(dsl::conn_id.eq(&input_id))
            .load(&mut db)?;

        match matches.len() {
            0 => Ok(DeleteOutcome::NotFound { conn_id: input_id }),
            1 => {
                diesel::delete(dsl::connections.find(&matches[0].id)).execute(&mut db)?;
                debug!("deleted connection conn_id={input_id}");
                Ok(DeleteOutcome::Deleted { conn_id: input_id })
            }
            count if delete_all => {
                diesel::delete(dsl::connections.filter(dsl::conn_id.eq(&input_id)))
                    .execute(&mut db)?;
                debug!("deleted {count} connections conn_id={input_id}");
                Ok(DeleteOutcome::DeletedAll {
                    conn_id: input_id,
                    count,
                })
            }
            count => Ok(DeleteOutcome::RequiresDeleteAll {
                conn_id: input_id,
                count,
            }),
        }
    }

    /// Updates the single connection matching `conn_id`. Fields present and
    /// non-empty in the request overwrite the stored values, absent or empty
    /// fields keep them; `extra` is overwritten whenever the request carries
    /// it, an explicit empty string included.
    pub fn update(&self, request: ConnectionRequest) -> Result<ConnectionResponse, RegistryError> {
        validate_request(&request)?;
        let input_id = request.conn_id.clone().unwrap_or_default();

        let mut db = self.db_pool.get()?;
        let mut matches: Vec<DbConnection> = dsl::connections
            .filter(dsl::conn_id.eq(&input_id))
            .load(&mut db)
            .map_err(|err| {
                error!("Error fetching connections with conn_id={input_id}: {err}");
                err
            })?;

        if matches.is_empty() {
            return Err(RegistryError::ConnectionNotFound(input_id));
        }
        if matches.len() > 1 {
            return Err(RegistryError::MultipleConnectionsFound {
                conn_id: input_id,
                count: matches.len(),
            });
        }
        let existing = matches.remove(0);
        let row_id = existing.id.clone();

        let incoming = build_connection(&request)?;
        let merged = merge_connection(Connection::from(existing), incoming);

        let changeset = NewConnection::from(merged, row_id.clone());
        diesel::update(dsl::connections.find(&row_id))
            .set(&changeset)
            .execute(&mut db)?;

        let updated: DbConnection = dsl::connections.find(&row_id).first(&mut db)?;
        Ok(ConnectionResponse::from(updated))
    }

    /// Returns every stored connection, unfiltered, in storage order.
    pub fn list(&self) -> Result<Vec<ConnectionResponse>, RegistryError> {
        let mut db = self.db_pool.get()?;
        let results: Vec<DbConnection> = dsl::connections.load(&mut db)?;
        Ok(results.into_iter().map(ConnectionResponse::from).collect())
    }
}

/// Checks the uri-vs-discrete-fields contract shared by `add` and `update`.
/// Missing arguments are collected and reported together, and take priority:
/// incompatible fields are never reported while anything required is absent.
fn validate_request(request: &ConnectionRequest) -> Result<(), RegistryError> {
    let mut missing = Vec::new();
    let mut incompatible = Vec::new();

    if is_blank(&request.conn_id) {
        missing.push("conn_id".to_owned());
    }

    if !is_blank(&request.conn_uri) {
        let discrete = [
            ("conn_type", &request.conn_type),
            ("host", &request.host),
            ("login", &request.login),
            ("password", &request.password),
            ("schema", &request.schema),
        ];
        for (name, value) in discrete {
            if !is_blank(value) {
                incompatible.push(name.to_owned());
            }
        }
        if request.port.is_some() {
            incompatible.push("port".to_owned());
        }
    } else if is_blank(&request.conn_type) {
        missing.push("conn_uri or conn_type".to_owned());
    }

    if !missing.is_empty() {
        return Err(RegistryError::MissingArgument(ArgumentError::Required(
            missing,
        )));
    }
    if !incompatible.is_empty() {
        return Err(RegistryError::MissingArgument(
            ArgumentError::IncompatibleWithUri(incompatible),
        ));
    }
    Ok(())
}

/// Builds the transient entity a validated request describes, from the uri
/// when one is given, from the discrete fields otherwise. `extra` is attached
/// whenever the request carries it, empty string included.
fn build_connection(request: &ConnectionRequest) -> Result<Connection, RegistryError> {
    let conn_id = request.conn_id.clone().unwrap_or_default();
    let mut connection = match request.conn_uri.as_deref().filter(|uri| !uri.is_empty()) {
        Some(uri) => Connection::from_uri(conn_id, uri)?,
        None => Connection {
            conn_id,
            conn_type: request.conn_type.clone(),
            host: request.host.clone(),
            login: request.login.clone(),
            password: request.password.clone(),
            schema: request.schema.clone(),
            port: request.port,
            extra: None,
        },
    };
    if let Some(extra) = request.extra.clone() {
        connection.set_extra(extra);
    }
    Ok(connection)
}

fn merge_connection(existing: Connection, incoming: Connection) -> Connection {
    Connection {
        conn_id: existing.conn_id,
        conn_type: non_empty(incoming.conn_type).or(existing.conn_type),
        host: non_empty(incoming.host).or(existing.host),
        login: non_empty(incoming.login).or(existing.login),
        password: non_empty(incoming.password).or(existing.password),
        schema: non_empty(incoming.schema).or(existing.schema),
        port: incoming.port.or(existing.port),
        // given-vs-absent is preserved for extra: an explicit empty value wins
        extra: incoming.extra.or(existing.extra),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
