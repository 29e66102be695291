//! Service layer for managing scheduler connection records.
//!
//! The crate's boundary is [`services::connection_service::ConnectionService`]:
//! the consuming CLI validates nothing itself, it forwards raw arguments and
//! renders the returned entities, outcomes and errors.

pub mod db;
pub mod errors;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;
