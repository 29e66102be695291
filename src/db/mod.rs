pub type DB = diesel::sqlite::Sqlite;
pub type Connection = diesel::sqlite::SqliteConnection;

pub mod connection;
pub mod pool;
pub mod schema;
