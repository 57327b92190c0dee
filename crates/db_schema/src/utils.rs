use diesel::{
  connection::SimpleConnection,
  r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection},
  Connection,
  SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;
use tracing::info;
use voids_utils::{
  error::VoidResult,
  settings::structs::Settings,
};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../../migrations");

/// Applied to every connection the pool opens.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
  busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
  fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
    conn
      .batch_execute(&format!(
        "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON;",
        self.busy_timeout_ms
      ))
      .map_err(r2d2::Error::QueryError)
  }
}

pub fn build_db_pool(settings: &Settings) -> VoidResult<DbPool> {
  let db_path = settings.get_database_path();
  let manager = ConnectionManager::<SqliteConnection>::new(&db_path);
  let pool = Pool::builder()
    .max_size(settings.database.pool_size)
    .connection_timeout(Duration::from_secs(30))
    .connection_customizer(Box::new(ConnectionOptions {
      busy_timeout_ms: settings.database.busy_timeout_ms,
    }))
    .build(manager)?;

  let mut conn = pool.get()?;
  run_migrations(&mut conn)?;
  drop(conn);
  info!("Connected to sqlite database at {}", db_path);

  Ok(pool)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> VoidResult<()> {
  info!("Running Database migrations (This may take a long time)...");
  conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| anyhow::anyhow!("Couldn't run DB Migrations: {e}"))?;
  info!("Database migrations complete.");
  Ok(())
}

/// An in-memory database shared by the single connection of the returned pool.
pub fn build_db_pool_for_tests() -> DbPool {
  let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
  let pool = Pool::builder()
    .max_size(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connection_customizer(Box::new(ConnectionOptions {
      busy_timeout_ms: 5000,
    }))
    .build(manager)
    .expect("db pool missing");
  let mut conn = pool.get().expect("db connection missing");
  run_migrations(&mut conn).expect("migrations failed");
  drop(conn);
  pool
}

/// A fresh migrated in-memory database, for unit tests which don't need a pool.
pub fn establish_unpooled_connection() -> SqliteConnection {
  let mut conn = SqliteConnection::establish(":memory:").expect("couldn't open sqlite memory db");
  conn
    .batch_execute("PRAGMA foreign_keys = ON;")
    .expect("couldn't enable foreign keys");
  run_migrations(&mut conn).expect("migrations failed");
  conn
}

/// True if the insert failed on one of the `UNIQUE` columns.
pub fn is_unique_violation(e: &diesel::result::Error) -> bool {
  matches!(
    e,
    diesel::result::Error::DatabaseError(
      diesel::result::DatabaseErrorKind::UniqueViolation,
      _
    )
  )
}
