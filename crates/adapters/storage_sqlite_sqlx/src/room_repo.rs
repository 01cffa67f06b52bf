//! `SQLite` implementation of [`RoomRepository`].
//!
//! Amenity links live in `room_amenities`; they are written in the same
//! transaction as the room and attached in insertion order when reading.

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use roomhub_app::ports::RoomRepository;
use roomhub_domain::error::RoomHubError;
use roomhub_domain::id::{AmenityId, OwnerId, RoomId};
use roomhub_domain::room::{NewRoom, Room, RoomKind};

use crate::error::StorageError;
use crate::row;

/// Wrapper for converting database rows into domain [`Room`].
///
/// The amenity list is left empty; see [`attach_amenities`].
struct Wrapper(Room);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let price: i64 = row.try_get("price")?;
        let rooms: i64 = row.try_get("rooms")?;
        let toilets: i64 = row.try_get("toilets")?;
        let kind: String = row.try_get("kind")?;
        let owner_id: i64 = row.try_get("owner_id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Room {
            id: RoomId::from(id),
            name: row.try_get("name")?,
            country: row.try_get("country")?,
            city: row.try_get("city")?,
            price: row::unsigned(price)?,
            rooms: row::unsigned(rooms)?,
            toilets: row::unsigned(toilets)?,
            description: row.try_get("description")?,
            address: row.try_get("address")?,
            pet_friendly: row.try_get("pet_friendly")?,
            kind: row::parse::<RoomKind>(&kind)?,
            rating: row.try_get("rating")?,
            owner_id: OwnerId::from(owner_id),
            amenities: Vec::new(),
            created_at: row::timestamp(&created_at)?,
            updated_at: row::timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO rooms (name, country, city, price, rooms, toilets, description, address, pet_friendly, kind, rating, owner_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const INSERT_AMENITY_LINK: &str =
    "INSERT INTO room_amenities (room_id, amenity_id) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM rooms WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM rooms ORDER BY id";
const SELECT_AMENITY_LINKS: &str =
    "SELECT room_id, amenity_id FROM room_amenities ORDER BY rowid";
const SELECT_AMENITY_LINKS_BY_ROOM: &str =
    "SELECT amenity_id FROM room_amenities WHERE room_id = ? ORDER BY rowid";

/// Fill in each room's amenity list from `(room_id, amenity_id)` link rows.
fn attach_amenities(rooms: Vec<Wrapper>, links: Vec<(i64, i64)>) -> Vec<Room> {
    let mut by_room: HashMap<i64, Vec<AmenityId>> = HashMap::new();
    for (room_id, amenity_id) in links {
        by_room
            .entry(room_id)
            .or_default()
            .push(AmenityId::from(amenity_id));
    }

    rooms
        .into_iter()
        .map(|Wrapper(mut room)| {
            room.amenities = by_room.remove(&room.id.as_i64()).unwrap_or_default();
            room
        })
        .collect()
}

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let result = sqlx::query(INSERT)
                .bind(&room.name)
                .bind(&room.country)
                .bind(&room.city)
                .bind(i64::from(room.price))
                .bind(i64::from(room.rooms))
                .bind(i64::from(room.toilets))
                .bind(&room.description)
                .bind(&room.address)
                .bind(room.pet_friendly)
                .bind(room.kind.as_str())
                .bind(room.rating)
                .bind(room.owner_id.as_i64())
                .bind(room.created_at.to_rfc3339())
                .bind(room.updated_at.to_rfc3339())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let id = result.last_insert_rowid();

            for amenity in &room.amenities {
                sqlx::query(INSERT_AMENITY_LINK)
                    .bind(id)
                    .bind(amenity.as_i64())
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;

            Ok(room.with_id(RoomId::from(id)))
        }
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let Some(Wrapper(mut room)) = row else {
                return Ok(None);
            };

            let links: Vec<(i64,)> = sqlx::query_as(SELECT_AMENITY_LINKS_BY_ROOM)
                .bind(id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            room.amenities = links.into_iter().map(|(a,)| AmenityId::from(a)).collect();

            Ok(Some(room))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, RoomHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let links: Vec<(i64, i64)> = sqlx::query_as(SELECT_AMENITY_LINKS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach_amenities(rows, links))
        }
    }

    fn get_many(
        &self,
        ids: &[RoomId],
    ) -> impl Future<Output = Result<Vec<Room>, RoomHubError>> + Send {
        let pool = self.pool.clone();
        let ids: Vec<i64> = ids.iter().map(|id| id.as_i64()).collect();
        async move {
            if ids.is_empty() {
                return Ok(Vec::new());
            }

            let mut rooms_query = QueryBuilder::<Sqlite>::new("SELECT * FROM rooms WHERE id IN (");
            let mut separated = rooms_query.separated(", ");
            for id in &ids {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") ORDER BY id");

            let rows: Vec<Wrapper> = rooms_query
                .build_query_as()
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let mut links_query = QueryBuilder::<Sqlite>::new(
                "SELECT room_id, amenity_id FROM room_amenities WHERE room_id IN (",
            );
            let mut separated = links_query.separated(", ");
            for id in &ids {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") ORDER BY rowid");

            let links: Vec<(i64, i64)> = links_query
                .build_query_as()
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach_amenities(rows, links))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amenity_repo::SqliteAmenityRepository;
    use crate::owner_repo::SqliteOwnerRepository;
    use crate::pool::Config;
    use roomhub_app::ports::{AmenityRepository, OwnerRepository};
    use roomhub_domain::amenity::NewAmenity;
    use roomhub_domain::owner::NewOwner;

    struct Fixture {
        rooms: SqliteRoomRepository,
        owner: OwnerId,
        wifi: AmenityId,
        sauna: AmenityId,
    }

    async fn setup() -> Fixture {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let owner = SqliteOwnerRepository::new(pool.clone())
            .create(NewOwner::new("mina").unwrap())
            .await
            .unwrap();
        let amenities = SqliteAmenityRepository::new(pool.clone());
        let wifi = amenities
            .create(NewAmenity::new("Wifi", None).unwrap())
            .await
            .unwrap();
        let sauna = amenities
            .create(NewAmenity::new("Sauna", None).unwrap())
            .await
            .unwrap();

        Fixture {
            rooms: SqliteRoomRepository::new(pool),
            owner: owner.id,
            wifi: wifi.id,
            sauna: sauna.id,
        }
    }

    fn hanok(fixture: &Fixture) -> NewRoom {
        Room::builder()
            .name("Hanok stay")
            .city("Jeonju")
            .price(95)
            .rooms(2)
            .pet_friendly(false)
            .kind(RoomKind::PrivateRoom)
            .rating(4.5)
            .owner_id(fixture.owner)
            .amenity(fixture.sauna)
            .amenity(fixture.wifi)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_persist_every_column_and_amenity_order() {
        let fixture = setup().await;
        let created = fixture.rooms.create(hanok(&fixture)).await.unwrap();

        let fetched = fixture.rooms.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Hanok stay");
        assert_eq!(fetched.country, "South Korea");
        assert_eq!(fetched.city, "Jeonju");
        assert_eq!(fetched.price, 95);
        assert_eq!(fetched.rooms, 2);
        assert_eq!(fetched.toilets, 1);
        assert!(!fetched.pet_friendly);
        assert_eq!(fetched.kind, RoomKind::PrivateRoom);
        assert!((fetched.rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(fetched.owner_id, fixture.owner);
        assert_eq!(fetched.amenities, vec![fixture.sauna, fixture.wifi]);
    }

    #[tokio::test]
    async fn should_return_none_when_room_not_found() {
        let fixture = setup().await;
        assert!(fixture.rooms.get_by_id(RoomId::from(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_roll_back_room_when_amenity_link_fails() {
        let fixture = setup().await;
        let room = Room::builder()
            .name("Ghost")
            .price(1)
            .kind(RoomKind::SharedRoom)
            .owner_id(fixture.owner)
            .amenity(AmenityId::from(999))
            .build()
            .unwrap();

        assert!(fixture.rooms.create(room).await.is_err());
        assert!(fixture.rooms.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_rooms_with_their_own_amenities() {
        let fixture = setup().await;
        let first = fixture.rooms.create(hanok(&fixture)).await.unwrap();
        let bare = Room::builder()
            .name("Bare room")
            .price(10)
            .kind(RoomKind::SharedRoom)
            .owner_id(fixture.owner)
            .build()
            .unwrap();
        let second = fixture.rooms.create(bare).await.unwrap();

        let all = fixture.rooms.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].amenities.len(), 2);
        assert_eq!(all[1].id, second.id);
        assert!(all[1].amenities.is_empty());
    }

    #[tokio::test]
    async fn should_skip_unknown_ids_in_get_many() {
        let fixture = setup().await;
        let room = fixture.rooms.create(hanok(&fixture)).await.unwrap();

        let found = fixture
            .rooms
            .get_many(&[RoomId::from(77), room.id])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amenities, vec![fixture.sauna, fixture.wifi]);

        assert!(fixture.rooms.get_many(&[]).await.unwrap().is_empty());
    }
}
