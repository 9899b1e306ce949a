use checklist_core::error::AppError;
use checklist_core::models::{Item, ItemChanges, NewItem};
use sqlx::{PgPool, Pool, Postgres};

use crate::session::{Session, map_db_error};

/// Repository for item persistence in PostgreSQL.
///
/// Each method runs in its own [`Session`].
#[derive(Clone)]
pub struct ItemRepository {
    pool: Pool<Postgres>,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new item. Returns it with the id assigned by the database.
    pub async fn create(&self, item: &NewItem) -> Result<Item, AppError> {
        let mut session = Session::begin(&self.pool).await?;
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (text, is_done)
            VALUES ($1, $2)
            RETURNING id, text, is_done
            "#,
        )
        .bind(&item.text)
        .bind(item.is_done)
        .fetch_one(session.conn())
        .await
        .map_err(map_db_error)?;
        session.commit().await?;

        Ok(row.into())
    }

    /// Up to `limit` items, lowest id first.
    pub async fn list(&self, limit: u32) -> Result<Vec<Item>, AppError> {
        let mut session = Session::begin(&self.pool).await?;
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, text, is_done
            FROM items
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(session.conn())
        .await
        .map_err(map_db_error)?;
        session.commit().await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Item>, AppError> {
        let mut session = Session::begin(&self.pool).await?;
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, text, is_done
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(session.conn())
        .await
        .map_err(map_db_error)?;
        session.commit().await?;

        Ok(row.map(Into::into))
    }

    /// Overwrite `text`, and `is_done` when given. `None` if the id does not exist.
    pub async fn update(&self, id: i32, changes: &ItemChanges) -> Result<Option<Item>, AppError> {
        let mut session = Session::begin(&self.pool).await?;
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items
            SET text = $2, is_done = COALESCE($3, is_done)
            WHERE id = $1
            RETURNING id, text, is_done
            "#,
        )
        .bind(id)
        .bind(&changes.text)
        .bind(changes.is_done)
        .fetch_optional(session.conn())
        .await
        .map_err(map_db_error)?;
        session.commit().await?;

        Ok(row.map(Into::into))
    }

    /// Delete an item. Returns `false` if the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut session = Session::begin(&self.pool).await?;
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(session.conn())
            .await
            .map_err(map_db_error)?;
        session.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i32,
    text: String,
    is_done: bool,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            text: row.text,
            is_done: row.is_done,
        }
    }
}

// -- Trait implementation --

impl checklist_core::traits::ItemStore for ItemRepository {
    async fn create(&self, item: &NewItem) -> Result<Item, AppError> {
        ItemRepository::create(self, item).await
    }

    async fn list(&self, limit: u32) -> Result<Vec<Item>, AppError> {
        ItemRepository::list(self, limit).await
    }

    async fn get(&self, id: i32) -> Result<Option<Item>, AppError> {
        ItemRepository::get(self, id).await
    }

    async fn update(&self, id: i32, changes: &ItemChanges) -> Result<Option<Item>, AppError> {
        ItemRepository::update(self, id, changes).await
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        ItemRepository::delete(self, id).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        ItemRepository::health_check(self).await
    }
}
