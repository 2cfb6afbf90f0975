//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and per-connection
//! SQLite pragmas.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::{QueryResult, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const IN_MEMORY: &str = ":memory:";

/// Pool size for file databases. SQLite still serializes writers.
const FILE_POOL_SIZE: u32 = 4;

/// Applied to every connection the pool hands out.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// An in-memory database lives only as long as its connection, so
/// `:memory:` gets a single connection that is never recycled.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = Pool::builder().connection_customizer(Box::new(SqlitePragmas));
    let builder = if database_url == IN_MEMORY {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(FILE_POOL_SIZE)
    };
    builder
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

/// Create a pool and bring the schema up to date.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn open(database_url: &str) -> Result<DbPool> {
    let pool = create_pool(database_url)?;
    run_migrations(&pool)?;
    Ok(pool)
}

/// Run a Diesel closure on tokio's blocking pool with a pooled connection.
///
/// Checkout failures map to [`Error::Connection`], query failures to
/// [`Error::Database`].
pub(crate) async fn with_conn<T, F>(pool: &DbPool, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
        f(&mut *conn).map_err(|e| Error::Database(e.to_string()))
    })
    .await
    .map_err(|e| Error::Database(format!("database task failed: {e}")))?
}
