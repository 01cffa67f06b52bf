//! `SQLite` implementation of [`CategoryRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roomhub_app::ports::CategoryRepository;
use roomhub_domain::category::{Category, CategoryKind, NewCategory};
use roomhub_domain::error::RoomHubError;
use roomhub_domain::id::CategoryId;

use crate::error::StorageError;
use crate::row;

/// Wrapper for converting database rows into domain [`Category`].
struct Wrapper(Category);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Category> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let kind: String = row.try_get("kind")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Category {
            id: CategoryId::from(id),
            name,
            kind: row::parse::<CategoryKind>(&kind)?,
            created_at: row::timestamp(&created_at)?,
            updated_at: row::timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO categories (name, kind, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM categories WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM categories ORDER BY id";
const UPDATE: &str = "UPDATE categories SET name = ?, kind = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM categories WHERE id = ?";

/// `SQLite`-backed category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&category.name)
                .bind(category.kind.as_str())
                .bind(category.created_at.to_rfc3339())
                .bind(category.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(category.with_id(CategoryId::from(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&category.name)
                .bind(category.kind.as_str())
                .bind(category.updated_at.to_rfc3339())
                .bind(category.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(category)
        }
    }

    fn delete(&self, id: CategoryId) -> impl Future<Output = Result<bool, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
