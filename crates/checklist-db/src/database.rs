use checklist_core::AppError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;
use crate::item_repository::ItemRepository;
use crate::schema::{ITEMS_TABLE, TableSchema};
use crate::session::{Session, map_db_error};

/// Tables created by [`Database::ensure_schema`], in creation order.
const TABLES: &[TableSchema] = &[ITEMS_TABLE];

/// Central database facade: owns the connection pool, ensures the schema,
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create every table and index that does not exist yet.
    ///
    /// Idempotent; existing tables and rows are left untouched.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let mut session = Session::begin(&self.pool).await?;
        for table in TABLES {
            for statement in table.create_statements() {
                sqlx::query(&statement)
                    .execute(session.conn())
                    .await
                    .map_err(map_db_error)?;
            }
            tracing::debug!(table = table.name, "table ensured");
        }
        session.commit().await
    }

    /// Get an [`ItemRepository`] backed by this pool.
    pub fn item_repo(&self) -> ItemRepository {
        ItemRepository::new(self.pool.clone())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting until every checked-out connection is returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
