//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use products_service::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary SQLite database used in integration tests.
///
/// The backing file lives in a temporary directory that is removed when the
/// value is dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join("test.db");
        let path = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(path).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
