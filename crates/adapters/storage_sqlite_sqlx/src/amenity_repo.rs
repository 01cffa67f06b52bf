//! `SQLite` implementation of [`AmenityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roomhub_app::ports::AmenityRepository;
use roomhub_domain::amenity::{Amenity, NewAmenity};
use roomhub_domain::error::RoomHubError;
use roomhub_domain::id::AmenityId;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Amenity);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Amenity> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: Option<String> = row.try_get("description")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Amenity {
            id: AmenityId::from(id),
            name,
            description,
            created_at: row::timestamp(&created_at)?,
            updated_at: row::timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO amenities (name, description, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities ORDER BY id";
// created_at is never rewritten after insert.
const UPDATE: &str = "UPDATE amenities SET name = ?, description = ?, updated_at = ? WHERE id = ?";

/// `SQLite`-backed amenity repository.
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    fn create(
        &self,
        amenity: NewAmenity,
    ) -> impl Future<Output = Result<Amenity, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&amenity.name)
                .bind(amenity.description.as_deref())
                .bind(amenity.created_at.to_rfc3339())
                .bind(amenity.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity.with_id(AmenityId::from(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, RoomHubError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, RoomHubError>> + Send {
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
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&amenity.name)
                .bind(amenity.description.as_deref())
                .bind(amenity.updated_at.to_rfc3339())
                .bind(amenity.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use chrono::TimeZone;

    async fn setup() -> SqliteAmenityRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteAmenityRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_store_missing_description_as_null() {
        let repo = setup().await;
        let created = repo
            .create(NewAmenity::new("Wifi", None).unwrap())
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Wifi");
        assert!(fetched.description.is_none());
    }

    #[tokio::test]
    async fn should_keep_created_at_when_updating() {
        let repo = setup().await;
        let created = repo
            .create(NewAmenity::new("Pool", Some("Outdoor".to_string())).unwrap())
            .await
            .unwrap();

        let mut edited = created.clone();
        edited.description = None;
        edited.created_at = chrono::Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        repo.update(edited).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert!(fetched.description.is_none());
        assert_eq!(
            fetched.created_at.timestamp_micros(),
            created.created_at.timestamp_micros()
        );
    }

    #[tokio::test]
    async fn should_list_amenities_in_id_order() {
        let repo = setup().await;
        repo.create(NewAmenity::new("Wifi", None).unwrap())
            .await
            .unwrap();
        repo.create(NewAmenity::new("Kitchen", None).unwrap())
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Wifi");
        assert_eq!(all[1].name, "Kitchen");
    }

    #[tokio::test]
    async fn should_return_none_when_amenity_not_found() {
        let repo = setup().await;
        assert!(repo.get_by_id(AmenityId::from(5)).await.unwrap().is_none());
    }
}
