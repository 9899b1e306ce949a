use checklist_core::AppError;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

/// A request-scoped unit of work: one pooled connection inside one transaction.
///
/// Call [`commit`](Self::commit) to persist. Dropping the session without
/// committing rolls the transaction back and returns the connection to the
/// pool, whichever way the caller exits.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Acquire a connection from `pool` and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let tx = pool.begin().await.map_err(map_db_error)?;
        tracing::trace!("session opened");
        Ok(Self { tx })
    }

    /// The connection to run statements on.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(map_db_error)?;
        tracing::trace!("session committed");
        Ok(())
    }
}

/// Classify a driver error: failing to get a connection is `ServiceUnavailable`,
/// everything else is a `DatabaseError`.
pub fn map_db_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => AppError::ServiceUnavailable(err.to_string()),
        other => AppError::DatabaseError(other.to_string()),
    }
}
