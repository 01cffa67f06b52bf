//! `SQLite` implementation of [`OwnerRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roomhub_app::ports::OwnerRepository;
use roomhub_domain::error::{RoomHubError, ValidationError};
use roomhub_domain::id::OwnerId;
use roomhub_domain::owner::{NewOwner, Owner};

use crate::error::StorageError;
use crate::row;

struct Wrapper(Owner);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let username: String = row.try_get("username")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Owner {
            id: OwnerId::from(id),
            username,
            created_at: row::timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO owners (username, created_at) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM owners WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM owners ORDER BY id";

/// `SQLite`-backed owner repository.
pub struct SqliteOwnerRepository {
    pool: SqlitePool,
}

impl SqliteOwnerRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OwnerRepository for SqliteOwnerRepository {
    fn create(&self, owner: NewOwner) -> impl Future<Output = Result<Owner, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&owner.username)
                .bind(owner.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(|err| match &err {
                    sqlx::Error::Database(db) if db.is_unique_violation() => {
                        RoomHubError::from(ValidationError::DuplicateUsername(
                            owner.username.clone(),
                        ))
                    }
                    _ => StorageError::from(err).into(),
                })?;

            Ok(owner.with_id(OwnerId::from(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: OwnerId,
    ) -> impl Future<Output = Result<Option<Owner>, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Owner>, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteOwnerRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteOwnerRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_create_and_retrieve_owner() {
        let repo = setup().await;
        let owner = repo.create(NewOwner::new("mina").unwrap()).await.unwrap();

        let fetched = repo.get_by_id(owner.id).await.unwrap().unwrap();
        assert_eq!(fetched.username, "mina");
    }

    #[tokio::test]
    async fn should_reject_duplicate_username() {
        let repo = setup().await;
        repo.create(NewOwner::new("mina").unwrap()).await.unwrap();

        let result = repo.create(NewOwner::new("mina").unwrap()).await;
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::DuplicateUsername(ref name))) if name == "mina"
        ));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_list_owners_in_id_order() {
        let repo = setup().await;
        repo.create(NewOwner::new("mina").unwrap()).await.unwrap();
        repo.create(NewOwner::new("jun").unwrap()).await.unwrap();

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.username)
            .collect();
        assert_eq!(names, vec!["mina", "jun"]);
    }
}
