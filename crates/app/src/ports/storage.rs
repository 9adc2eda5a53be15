//! Storage port — repository trait for haiku persistence.

use std::future::Future;

use haikus_domain::error::HaikuError;
use haikus_domain::haiku::Haiku;
use haikus_domain::id::HaikuId;

/// Repository for persisting and querying [`Haiku`]s.
///
/// Storage failures are returned as [`HaikuError::Storage`] carrying the
/// driver's message unchanged.
pub trait HaikuRepository {
    /// Insert several haikus at once. Either every row is stored or none is.
    fn create_many(
        &self,
        haikus: Vec<Haiku>,
    ) -> impl Future<Output = Result<Vec<Haiku>, HaikuError>> + Send;

    /// Insert a single haiku.
    fn create(&self, haiku: Haiku) -> impl Future<Output = Result<Haiku, HaikuError>> + Send;

    /// Get a haiku by its unique identifier.
    fn get_by_id(
        &self,
        id: HaikuId,
    ) -> impl Future<Output = Result<Option<Haiku>, HaikuError>> + Send;

    /// Get every haiku in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Haiku>, HaikuError>> + Send;

    /// Overwrite the stored fields of the haiku sharing `haiku.id`.
    fn update(&self, haiku: Haiku) -> impl Future<Output = Result<Haiku, HaikuError>> + Send;

    /// Delete the haiku with the given id. Deleting a missing id is not an error.
    fn delete(&self, id: HaikuId) -> impl Future<Output = Result<(), HaikuError>> + Send;
}
