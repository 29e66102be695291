pub mod connection_service;
pub mod types;
