//! Shared application state for axum handlers.

use std::sync::Arc;

use roomhub_app::ports::{
    AmenityRepository, CategoryRepository, OwnerRepository, RoomRepository,
};
use roomhub_app::services::amenity_service::AmenityService;
use roomhub_app::services::category_service::CategoryService;
use roomhub_app::services::owner_service::OwnerService;
use roomhub_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the category, room, amenity and owner repositories to avoid
/// dynamic dispatch. `Clone` is implemented manually so the repositories do
/// not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<CR, RR, AR, OR> {
    /// Category CRUD service.
    pub category_service: Arc<CategoryService<CR>>,
    /// Room browsing and room admin service.
    pub room_service: Arc<RoomService<RR, OR, AR>>,
    /// Amenity admin service.
    pub amenity_service: Arc<AmenityService<AR>>,
    /// Owner create/list service.
    pub owner_service: Arc<OwnerService<OR>>,
}

impl<CR, RR, AR, OR> Clone for AppState<CR, RR, AR, OR> {
    fn clone(&self) -> Self {
        Self {
            category_service: Arc::clone(&self.category_service),
            room_service: Arc::clone(&self.room_service),
            amenity_service: Arc::clone(&self.amenity_service),
            owner_service: Arc::clone(&self.owner_service),
        }
    }
}

impl<CR, RR, AR, OR> AppState<CR, RR, AR, OR>
where
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    OR: OwnerRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        category_service: CategoryService<CR>,
        room_service: RoomService<RR, OR, AR>,
        amenity_service: AmenityService<AR>,
        owner_service: OwnerService<OR>,
    ) -> Self {
        Self {
            category_service: Arc::new(category_service),
            room_service: Arc::new(room_service),
            amenity_service: Arc::new(amenity_service),
            owner_service: Arc::new(owner_service),
        }
    }
}
