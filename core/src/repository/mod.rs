//! Storage abstraction for support requests.
//!
//! [`RequestRepository`] is the seam between the lifecycle service and a
//! concrete store. [`InMemoryRequestRepository`] backs tests and local
//! development; the Postgres implementation lives in its own crate.

mod memory;

pub use memory::InMemoryRequestRepository;

use crate::error::Result;
use crate::model::{RequestId, SupportRequest};
use async_trait::async_trait;

/// Persistence operations for support requests.
///
/// Implementations must assign identifiers starting at 1 and never reuse
/// an identifier, even after the request holding it is deleted.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Returns every stored request ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`](crate::RequestError::Database) if
    /// the store cannot be read.
    async fn find_all(&self) -> Result<Vec<SupportRequest>>;

    /// Looks up a single request, returning `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`](crate::RequestError::Database) if
    /// the store cannot be read.
    async fn find_by_id(&self, id: RequestId) -> Result<Option<SupportRequest>>;

    /// Persists a request and returns the stored value.
    ///
    /// A request without an id is inserted under the next free id; one
    /// carrying an id overwrites the existing row. A missing `request_date`
    /// is stamped with the current time either way.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NotFound`](crate::RequestError::NotFound)
    /// when updating an id that is not present, or
    /// [`RequestError::Database`](crate::RequestError::Database) if the
    /// store cannot be written.
    async fn save(&self, request: SupportRequest) -> Result<SupportRequest>;

    /// Reports whether a request with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`](crate::RequestError::Database) if
    /// the store cannot be read.
    async fn exists_by_id(&self, id: RequestId) -> Result<bool>;

    /// Removes a request if present. Deleting an unknown id is a no-op;
    /// callers that need existence enforced check first.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`](crate::RequestError::Database) if
    /// the store cannot be written.
    async fn delete_by_id(&self, id: RequestId) -> Result<()>;
}
