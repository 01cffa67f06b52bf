//! Owner service — minimal user management so rooms have someone to belong to.

use roomhub_domain::error::RoomHubError;
use roomhub_domain::owner::{NewOwner, Owner};

use crate::ports::OwnerRepository;

/// Application service for owners.
pub struct OwnerService<R> {
    repo: R,
}

impl<R: OwnerRepository> OwnerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_owners(&self) -> Result<Vec<Owner>, RoomHubError> {
        self.repo.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateUsername`] when the username is
    /// already taken, or a storage error from the repository.
    ///
    /// [`ValidationError::DuplicateUsername`]: roomhub_domain::error::ValidationError::DuplicateUsername
    #[tracing::instrument(skip(self, owner), fields(username = %owner.username))]
    pub async fn create_owner(&self, owner: NewOwner) -> Result<Owner, RoomHubError> {
        self.repo.create(owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomhub_domain::id::OwnerId;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryOwnerRepo {
        store: Mutex<Vec<Owner>>,
    }

    impl OwnerRepository for InMemoryOwnerRepo {
        async fn create(&self, owner: NewOwner) -> Result<Owner, RoomHubError> {
            let mut store = self.store.lock().unwrap();
            let owner = owner.with_id(OwnerId::from(store.len() as i64 + 1));
            store.push(owner.clone());
            Ok(owner)
        }

        async fn get_by_id(&self, id: OwnerId) -> Result<Option<Owner>, RoomHubError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id == id)
                .cloned())
        }

        async fn get_all(&self) -> Result<Vec<Owner>, RoomHubError> {
            Ok(self.store.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn should_create_and_list_owners() {
        let svc = OwnerService::new(InMemoryOwnerRepo::default());
        svc.create_owner(NewOwner::new("mina").unwrap())
            .await
            .unwrap();
        svc.create_owner(NewOwner::new("jun").unwrap())
            .await
            .unwrap();

        let owners = svc.list_owners().await.unwrap();
        assert_eq!(owners.len(), 2);
        assert_eq!(owners[1].username, "jun");
    }
}
