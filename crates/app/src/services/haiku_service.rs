//! Haiku service — use-cases for managing haikus.

use haikus_domain::error::{HaikuError, NotFoundError};
use haikus_domain::haiku::Haiku;
use haikus_domain::id::HaikuId;

use crate::ports::HaikuRepository;

/// Application service for haiku CRUD operations.
pub struct HaikuService<R> {
    repo: R,
}

impl<R: HaikuRepository> HaikuService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a batch of haikus after validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`HaikuError::Validation`] if any haiku is invalid (nothing is
    /// written in that case), or a storage error from the repository.
    #[tracing::instrument(skip(self, haikus), fields(count = haikus.len()))]
    pub async fn create_haikus(&self, haikus: Vec<Haiku>) -> Result<Vec<Haiku>, HaikuError> {
        for haiku in &haikus {
            haiku.validate()?;
        }
        self.repo.create_many(haikus).await
    }

    /// Insert a single haiku after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HaikuError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, haiku), fields(haiku_id = %haiku.id))]
    pub async fn create_haiku(&self, haiku: Haiku) -> Result<Haiku, HaikuError> {
        haiku.validate()?;
        self.repo.create(haiku).await
    }

    /// Look up a haiku by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HaikuError::NotFound`] when no haiku with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_haiku(&self, id: HaikuId) -> Result<Haiku, HaikuError> {
        let found = self.repo.get_by_id(id.clone()).await?;
        found.ok_or_else(|| {
            NotFoundError {
                entity: "Haiku",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all haikus.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_haikus(&self) -> Result<Vec<Haiku>, HaikuError> {
        self.repo.get_all().await
    }

    /// Update an existing haiku.
    ///
    /// # Errors
    ///
    /// Returns [`HaikuError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, haiku), fields(haiku_id = %haiku.id))]
    pub async fn update_haiku(&self, haiku: Haiku) -> Result<Haiku, HaikuError> {
        haiku.validate()?;
        self.repo.update(haiku).await
    }

    /// Delete the stored row matching `haiku.id`; the other fields are ignored.
    ///
    /// Succeeds whether or not such a row exists.
    ///
    /// # Errors
    ///
    /// Returns the repository's storage error, message untouched.
    #[tracing::instrument(skip(self, haiku), fields(haiku_id = %haiku.id))]
    pub async fn delete_haiku(&self, haiku: &Haiku) -> Result<(), HaikuError> {
        self.remove(haiku.id.clone()).await
    }

    /// Delete a haiku by id.
    ///
    /// # Errors
    ///
    /// Returns the repository's storage error, message untouched.
    #[tracing::instrument(skip(self))]
    pub async fn delete_haiku_by_id(&self, id: HaikuId) -> Result<(), HaikuError> {
        self.remove(id).await
    }

    async fn remove(&self, id: HaikuId) -> Result<(), HaikuError> {
        self.repo.delete(id).await.inspect_err(|err| {
            tracing::debug!(%err, "delete failed");
        })
    }
}
