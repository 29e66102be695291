use diesel::r2d2::ConnectionManager;
use r2d2::{CustomizeConnection, Pool};

use crate::db::pool::run_migrations;
use crate::db::Connection;

#[derive(Debug)]
struct TestConnectionCustomizer;

impl<E> CustomizeConnection<Connection, E> for TestConnectionCustomizer {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), E> {
        run_migrations(conn).unwrap();
        Ok(())
    }
    fn on_release(&self, conn: Connection) {
        std::mem::drop(conn);
    }
}

pub type DbPool = Pool<ConnectionManager<Connection>>;

pub fn establish_test_connection(database_url: String) -> DbPool {
    let manager = ConnectionManager::<Connection>::new(database_url);
    r2d2::Pool::builder()
        // every sqlite :memory: connection is its own database, so the pool
        // must hand out the same connection for the whole test
        .max_size(1)
        .connection_customizer(Box::new(TestConnectionCustomizer))
        .build(manager)
        .expect("Failed to create DB pool.")
}

pub fn database_url_for_test_env() -> String {
    String::from(":memory:")
}
