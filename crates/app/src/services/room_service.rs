//! Room service — browsing, creation and the room admin change list.

use std::collections::HashMap;

use roomhub_domain::admin::ChangeList;
use roomhub_domain::admin::room::{self as room_admin, RoomAction, RoomQuery};
use roomhub_domain::amenity::Amenity;
use roomhub_domain::error::{NotFoundError, RoomHubError, ValidationError};
use roomhub_domain::id::{OwnerId, RoomId};
use roomhub_domain::owner::Owner;
use roomhub_domain::room::{NewRoom, Room};
use roomhub_domain::time::Timestamp;

use crate::ports::{AmenityRepository, OwnerRepository, RoomRepository};
use crate::request::AdminRequestContext;

/// A room together with the records it references.
#[derive(Debug, Clone)]
pub struct RoomDetail {
    pub room: Room,
    pub owner: Option<Owner>,
    pub amenities: Vec<Amenity>,
}

/// What a bulk action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub action: RoomAction,
    /// Selected rooms that exist.
    pub selected: usize,
    /// Rooms whose stored data changed.
    pub modified: usize,
}

/// Application service for rooms.
pub struct RoomService<RR, OR, AR> {
    rooms: RR,
    owners: OR,
    amenities: AR,
}

impl<RR, OR, AR> RoomService<RR, OR, AR>
where
    RR: RoomRepository,
    OR: OwnerRepository,
    AR: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(rooms: RR, owners: OR, amenities: AR) -> Self {
        Self {
            rooms,
            owners,
            amenities,
        }
    }

    /// Every room, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, RoomHubError> {
        self.rooms.get_all().await
    }

    /// Look up a room and resolve its owner and amenities.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::NotFound`] when no room with `id` exists,
    /// or a storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_room(&self, id: RoomId) -> Result<RoomDetail, RoomHubError> {
        let room = self.rooms.get_by_id(id).await?.ok_or_else(|| NotFoundError {
            entity: "Room",
            id: id.to_string(),
        })?;

        let owner = self.owners.get_by_id(room.owner_id).await?;
        let mut amenities = Vec::with_capacity(room.amenities.len());
        for amenity_id in &room.amenities {
            if let Some(amenity) = self.amenities.get_by_id(*amenity_id).await? {
                amenities.push(amenity);
            }
        }

        Ok(RoomDetail {
            room,
            owner,
            amenities,
        })
    }

    /// Persist a new room after checking that its references exist.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownOwner`] or
    /// [`ValidationError::UnknownAmenity`] for dangling references, or a
    /// storage error from a repository.
    #[tracing::instrument(skip(self, room), fields(room_name = %room.name))]
    pub async fn create_room(&self, room: NewRoom) -> Result<Room, RoomHubError> {
        if self.owners.get_by_id(room.owner_id).await?.is_none() {
            return Err(ValidationError::UnknownOwner(room.owner_id).into());
        }
        for amenity_id in &room.amenities {
            if self.amenities.get_by_id(*amenity_id).await?.is_none() {
                return Err(ValidationError::UnknownAmenity(*amenity_id).into());
            }
        }

        let created = self.rooms.create(room).await?;
        tracing::info!(room_id = %created.id, "room created");
        Ok(created)
    }

    /// Build the admin change list for the rooms matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from a repository.
    #[tracing::instrument(skip(self, query))]
    pub async fn change_list(
        &self,
        query: &RoomQuery,
        now: Timestamp,
    ) -> Result<ChangeList, RoomHubError> {
        let rooms = self.rooms.get_all().await?;
        let owners: HashMap<OwnerId, Owner> = self
            .owners
            .get_all()
            .await?
            .into_iter()
            .map(|owner| (owner.id, owner))
            .collect();

        let matching = rooms.iter().filter_map(|room| {
            let owner = owners.get(&room.owner_id);
            query.matches(room, owner, now).then_some((room, owner))
        });
        Ok(room_admin::change_list(matching))
    }

    /// Run a bulk action over the selected rooms.
    ///
    /// `ResetPrices` only records the request and the selection; it does
    /// not modify any room.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, action, ctx, ids), fields(action = %action))]
    pub async fn run_action(
        &self,
        action: RoomAction,
        ctx: &AdminRequestContext,
        ids: &[RoomId],
    ) -> Result<ActionReport, RoomHubError> {
        let selected = self.rooms.get_many(ids).await?;

        match action {
            RoomAction::ResetPrices => {
                tracing::info!(
                    admin = room_admin::TITLE,
                    request = %ctx,
                    selected = ?selected.iter().map(|room| room.id).collect::<Vec<_>>(),
                    "bulk action invoked"
                );
            }
        }

        Ok(ActionReport {
            action,
            selected: selected.len(),
            modified: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomhub_domain::admin::room::RoomFilters;
    use roomhub_domain::amenity::NewAmenity;
    use roomhub_domain::id::AmenityId;
    use roomhub_domain::owner::NewOwner;
    use roomhub_domain::room::RoomKind;
    use roomhub_domain::time::now;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRoomRepo {
        store: Mutex<BTreeMap<RoomId, Room>>,
    }

    impl RoomRepository for InMemoryRoomRepo {
        async fn create(&self, room: NewRoom) -> Result<Room, RoomHubError> {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().last().map_or(1, |id| id.as_i64() + 1);
            let room = room.with_id(RoomId::from(next));
            store.insert(room.id, room.clone());
            Ok(room)
        }

        async fn get_by_id(&self, id: RoomId) -> Result<Option<Room>, RoomHubError> {
            Ok(self.store.lock().unwrap().get(&id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Room>, RoomHubError> {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        }

        async fn get_many(&self, ids: &[RoomId]) -> Result<Vec<Room>, RoomHubError> {
            let store = self.store.lock().unwrap();
            Ok(ids.iter().filter_map(|id| store.get(id).cloned()).collect())
        }
    }

    #[derive(Default)]
    struct InMemoryOwnerRepo {
        store: Mutex<BTreeMap<OwnerId, Owner>>,
    }

    impl OwnerRepository for InMemoryOwnerRepo {
        async fn create(&self, owner: NewOwner) -> Result<Owner, RoomHubError> {
            let mut store = self.store.lock().unwrap();
            let owner = owner.with_id(OwnerId::from(store.len() as i64 + 1));
            store.insert(owner.id, owner.clone());
            Ok(owner)
        }

        async fn get_by_id(&self, id: OwnerId) -> Result<Option<Owner>, RoomHubError> {
            Ok(self.store.lock().unwrap().get(&id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Owner>, RoomHubError> {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct InMemoryAmenityRepo {
        store: Mutex<BTreeMap<AmenityId, Amenity>>,
    }

    impl AmenityRepository for InMemoryAmenityRepo {
        async fn create(&self, amenity: NewAmenity) -> Result<Amenity, RoomHubError> {
            let mut store = self.store.lock().unwrap();
            let amenity = amenity.with_id(AmenityId::from(store.len() as i64 + 1));
            store.insert(amenity.id, amenity.clone());
            Ok(amenity)
        }

        async fn get_by_id(&self, id: AmenityId) -> Result<Option<Amenity>, RoomHubError> {
            Ok(self.store.lock().unwrap().get(&id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Amenity>, RoomHubError> {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, amenity: Amenity) -> Result<Amenity, RoomHubError> {
            self.store
                .lock()
                .unwrap()
                .insert(amenity.id, amenity.clone());
            Ok(amenity)
        }
    }

    type Service = RoomService<InMemoryRoomRepo, InMemoryOwnerRepo, InMemoryAmenityRepo>;

    fn make_service() -> Service {
        RoomService::new(
            InMemoryRoomRepo::default(),
            InMemoryOwnerRepo::default(),
            InMemoryAmenityRepo::default(),
        )
    }

    async fn seed_owner(svc: &Service, username: &str) -> Owner {
        svc.owners
            .create(NewOwner::new(username).unwrap())
            .await
            .unwrap()
    }

    fn new_room(name: &str, price: i64, owner: OwnerId) -> NewRoom {
        Room::builder()
            .name(name)
            .price(price)
            .kind(RoomKind::EntirePlace)
            .owner_id(owner)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_list_every_stored_room() {
        let svc = make_service();
        let owner = seed_owner(&svc, "mina").await;
        for i in 0..3 {
            svc.create_room(new_room(&format!("Room {i}"), 100, owner.id))
                .await
                .unwrap();
        }

        assert_eq!(svc.list_rooms().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_room() {
        let svc = make_service();
        let result = svc.get_room(RoomId::from(99)).await;
        assert!(matches!(result, Err(RoomHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_resolve_owner_and_amenities_in_detail() {
        let svc = make_service();
        let owner = seed_owner(&svc, "mina").await;
        let wifi = svc
            .amenities
            .create(NewAmenity::new("Wifi", None).unwrap())
            .await
            .unwrap();

        let room = Room::builder()
            .name("Loft")
            .price(80)
            .kind(RoomKind::PrivateRoom)
            .owner_id(owner.id)
            .amenity(wifi.id)
            .build()
            .unwrap();
        let created = svc.create_room(room).await.unwrap();

        let detail = svc.get_room(created.id).await.unwrap();
        assert_eq!(detail.owner.unwrap().username, "mina");
        assert_eq!(detail.amenities.len(), 1);
        assert_eq!(detail.amenities[0].name, "Wifi");
    }

    #[tokio::test]
    async fn should_reject_room_with_unknown_owner() {
        let svc = make_service();
        let result = svc
            .create_room(new_room("Loft", 80, OwnerId::from(12)))
            .await;
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::UnknownOwner(_)))
        ));
    }

    #[tokio::test]
    async fn should_reject_room_with_unknown_amenity() {
        let svc = make_service();
        let owner = seed_owner(&svc, "mina").await;
        let room = Room::builder()
            .name("Loft")
            .price(80)
            .kind(RoomKind::PrivateRoom)
            .owner_id(owner.id)
            .amenity(AmenityId::from(5))
            .build()
            .unwrap();

        let result = svc.create_room(room).await;
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::UnknownAmenity(_)))
        ));
    }

    #[tokio::test]
    async fn should_leave_prices_unchanged_after_reset_prices() {
        let svc = make_service();
        let owner = seed_owner(&svc, "mina").await;
        let a = svc.create_room(new_room("A", 150, owner.id)).await.unwrap();
        let b = svc.create_room(new_room("B", 90, owner.id)).await.unwrap();

        let report = svc
            .run_action(
                RoomAction::ResetPrices,
                &AdminRequestContext::default(),
                &[a.id, b.id, RoomId::from(1000)],
            )
            .await
            .unwrap();

        assert_eq!(report.selected, 2);
        assert_eq!(report.modified, 0);
        assert_eq!(svc.get_room(a.id).await.unwrap().room.price, 150);
        assert_eq!(svc.get_room(b.id).await.unwrap().room.price, 90);
    }

    #[tokio::test]
    async fn should_filter_change_list_by_query() {
        let svc = make_service();
        let mina = seed_owner(&svc, "mina").await;
        let jun = seed_owner(&svc, "jun").await;
        svc.create_room(new_room("Loft", 150, mina.id)).await.unwrap();
        svc.create_room(new_room("Cabin", 90, jun.id)).await.unwrap();

        let query = RoomQuery {
            search: Some("jun".to_string()),
            filters: RoomFilters::default(),
        };
        let list = svc.change_list(&query, now()).await.unwrap();

        assert_eq!(list.rows.len(), 1);
        assert_eq!(list.rows[0].cells[0], "Cabin");
        assert_eq!(list.rows[0].cells[4], "jun");
    }

    #[tokio::test]
    async fn should_list_everything_with_empty_query() {
        let svc = make_service();
        let mina = seed_owner(&svc, "mina").await;
        svc.create_room(new_room("Loft", 150, mina.id)).await.unwrap();
        svc.create_room(new_room("Cabin", 90, mina.id)).await.unwrap();

        let list = svc.change_list(&RoomQuery::default(), now()).await.unwrap();
        assert_eq!(list.rows.len(), 2);
    }
}
