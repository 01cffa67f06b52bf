//! Category service — use-cases behind the category collection and item endpoints.

use roomhub_domain::category::{Category, CategoryPatch, NewCategory};
use roomhub_domain::error::{NotFoundError, RoomHubError};
use roomhub_domain::id::CategoryId;

use crate::ports::CategoryRepository;

/// Application service for category CRUD operations.
pub struct CategoryService<R> {
    repo: R,
}

fn not_found(id: CategoryId) -> RoomHubError {
    NotFoundError {
        entity: "Category",
        id: id.to_string(),
    }
    .into()
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RoomHubError> {
        self.repo.get_all().await
    }

    /// Persist a validated category.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, category), fields(category_name = %category.name))]
    pub async fn create_category(&self, category: NewCategory) -> Result<Category, RoomHubError> {
        let created = self.repo.create(category).await?;
        tracing::info!(category_id = %created.id, "category created");
        Ok(created)
    }

    /// Look up a category by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, RoomHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Apply a partial update to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::NotFound`] when the category does not exist,
    /// [`RoomHubError::Validation`] if the patched record breaks an
    /// invariant, or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> Result<Category, RoomHubError> {
        let mut category = self.get_category(id).await?;
        category.apply(patch);
        category.validate()?;
        self.repo.update(category).await
    }

    /// Permanently delete a category.
    ///
    /// # Errors
    ///
    /// Returns [`RoomHubError::NotFound`] when the category does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), RoomHubError> {
        if self.repo.delete(id).await? {
            tracing::info!(category_id = %id, "category deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
