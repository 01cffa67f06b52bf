//! Storage port — repository traits for persistence.
//!
//! Primary keys are assigned by storage: `create` takes a `New*` record and
//! returns the stored record with its id.

use std::future::Future;

use roomhub_domain::amenity::{Amenity, NewAmenity};
use roomhub_domain::category::{Category, NewCategory};
use roomhub_domain::error::RoomHubError;
use roomhub_domain::id::{AmenityId, CategoryId, OwnerId, RoomId};
use roomhub_domain::owner::{NewOwner, Owner};
use roomhub_domain::room::{NewRoom, Room};

/// Repository for persisting and querying [`Category`] records.
pub trait CategoryRepository {
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, RoomHubError>> + Send;

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, RoomHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, RoomHubError>> + Send;

    fn update(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, RoomHubError>> + Send;

    /// Delete by id. Resolves to `false` when nothing was deleted.
    fn delete(&self, id: CategoryId) -> impl Future<Output = Result<bool, RoomHubError>> + Send;
}

/// Repository for [`Room`] records, including their amenity links.
pub trait RoomRepository {
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, RoomHubError>> + Send;

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, RoomHubError>> + Send;

    /// Every room, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, RoomHubError>> + Send;

    /// The rooms among `ids` that exist; unknown ids are skipped.
    fn get_many(
        &self,
        ids: &[RoomId],
    ) -> impl Future<Output = Result<Vec<Room>, RoomHubError>> + Send;
}

/// Repository for [`Amenity`] records.
pub trait AmenityRepository {
    fn create(
        &self,
        amenity: NewAmenity,
    ) -> impl Future<Output = Result<Amenity, RoomHubError>> + Send;

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, RoomHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, RoomHubError>> + Send;

    fn update(
        &self,
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, RoomHubError>> + Send;
}

/// Repository for [`Owner`] records.
pub trait OwnerRepository {
    fn create(&self, owner: NewOwner)
    -> impl Future<Output = Result<Owner, RoomHubError>> + Send;

    fn get_by_id(
        &self,
        id: OwnerId,
    ) -> impl Future<Output = Result<Option<Owner>, RoomHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Owner>, RoomHubError>> + Send;
}
