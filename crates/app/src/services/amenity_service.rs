//! Amenity service — admin list, create and edit.

use roomhub_domain::admin::ChangeList;
use roomhub_domain::admin::amenity as amenity_admin;
use roomhub_domain::amenity::{Amenity, NewAmenity};
use roomhub_domain::error::{NotFoundError, RoomHubError};
use roomhub_domain::id::AmenityId;
use serde_json::{Map, Value};

use crate::ports::AmenityRepository;

/// Application service for amenities.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Admin change list of every amenity.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn change_list(&self) -> Result<ChangeList, RoomHubError> {
        let amenities = self.repo.get_all().await?;
        Ok(amenity_admin::change_list(&amenities))
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, amenity), fields(amenity_name = %amenity.name))]
    pub async fn create_amenity(&self, amenity: NewAmenity) -> Result<Amenity, RoomHubError> {
        self.repo.create(amenity).await
    }

    /// # Errors
    ///
    /// Returns [`RoomHubError::NotFound`] when no amenity with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, RoomHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Amenity",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Apply an admin edit payload.
    ///
    /// Read-only fields (`created_at`, `updated_at`) are dropped from the
    /// payload before anything else is applied.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::NotFound`] when the amenity does not exist,
    /// [`RoomHubError::Validation`] for a malformed payload or a broken
    /// invariant, or a storage error from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn edit_amenity(
        &self,
        id: AmenityId,
        payload: Map<String, Value>,
    ) -> Result<Amenity, RoomHubError> {
        let edit = amenity_admin::sanitize_edit(payload)?;
        if !edit.ignored.is_empty() {
            tracing::debug!(ignored = ?edit.ignored, "dropped read-only fields from edit");
        }

        let mut amenity = self.get_amenity(id).await?;
        amenity.apply(edit.patch);
        amenity.validate()?;
        self.repo.update(amenity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomhub_domain::error::ValidationError;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryAmenityRepo {
        store: Mutex<BTreeMap<AmenityId, Amenity>>,
    }

    impl AmenityRepository for InMemoryAmenityRepo {
        async fn create(&self, amenity: NewAmenity) -> Result<Amenity, RoomHubError> {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().last().map_or(1, |id| id.as_i64() + 1);
            let amenity = amenity.with_id(AmenityId::from(next));
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

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    async fn seeded() -> (AmenityService<InMemoryAmenityRepo>, Amenity) {
        let svc = AmenityService::new(InMemoryAmenityRepo::default());
        let wifi = svc
            .create_amenity(NewAmenity::new("Wifi", None).unwrap())
            .await
            .unwrap();
        (svc, wifi)
    }

    #[tokio::test]
    async fn should_ignore_submitted_timestamps_on_edit() {
        let (svc, wifi) = seeded().await;

        let edited = svc
            .edit_amenity(
                wifi.id,
                payload(json!({
                    "name": "Fast wifi",
                    "created_at": "2000-01-01T00:00:00Z",
                    "updated_at": "2000-01-01T00:00:00Z"
                })),
            )
            .await
            .unwrap();

        assert_eq!(edited.name, "Fast wifi");
        assert_eq!(edited.created_at, wifi.created_at);
        assert!(edited.updated_at >= wifi.updated_at);
        assert_ne!(edited.updated_at.to_rfc3339(), "2000-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn should_return_not_found_when_editing_missing_amenity() {
        let (svc, _) = seeded().await;
        let result = svc
            .edit_amenity(AmenityId::from(77), payload(json!({ "name": "Pool" })))
            .await;
        assert!(matches!(result, Err(RoomHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_edit_that_blanks_the_name() {
        let (svc, wifi) = seeded().await;
        let result = svc
            .edit_amenity(wifi.id, payload(json!({ "name": "" })))
            .await;
        assert!(matches!(
            result,
            Err(RoomHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_build_change_list_with_one_row_per_amenity() {
        let (svc, _) = seeded().await;
        svc.create_amenity(NewAmenity::new("Kitchen", Some("Full".to_string())).unwrap())
            .await
            .unwrap();

        let list = svc.change_list().await.unwrap();
        assert_eq!(list.rows.len(), 2);
        assert_eq!(list.title, "Amenities");
    }
}
