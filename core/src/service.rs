//! Lifecycle service for support requests.

use crate::error::{RequestError, Result};
use crate::model::{RequestId, SupportRequest};
use crate::repository::RequestRepository;
use std::sync::Arc;

/// Coordinates support request lifecycle operations over a repository.
///
/// The service owns the existence rules: `update` and `delete` refuse to
/// touch an id that is not stored, while `find_by_id` reports absence as
/// `None` and leaves the decision to the caller.
#[derive(Clone)]
pub struct RequestService {
    repository: Arc<dyn RequestRepository>,
}

impl RequestService {
    /// Create a service backed by the given repository.
    #[must_use]
    pub const fn new(repository: Arc<dyn RequestRepository>) -> Self {
        Self { repository }
    }

    /// Returns every stored request ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`] if the store cannot be read.
    pub async fn get_all(&self) -> Result<Vec<SupportRequest>> {
        self.repository.find_all().await
    }

    /// Looks up a single request, returning `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`] if the store cannot be read.
    pub async fn find_by_id(&self, id: RequestId) -> Result<Option<SupportRequest>> {
        self.repository.find_by_id(id).await
    }

    /// Stores a new request, returning it with its assigned id and date.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`] if the store cannot be written.
    pub async fn store(&self, request: SupportRequest) -> Result<SupportRequest> {
        self.repository.save(request).await
    }

    /// Replaces the name, subject, and description of an existing request.
    ///
    /// The stored id and `request_date` are kept; whatever the caller put
    /// in those fields is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NotFound`] when no request exists under
    /// `id`, or [`RequestError::Database`] if the store fails.
    pub async fn update(&self, id: RequestId, request: SupportRequest) -> Result<SupportRequest> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RequestError::NotFound(id))?;

        let updated = SupportRequest {
            request_name: request.request_name,
            subject: request.subject,
            description: request.description,
            ..existing
        };

        self.repository.save(updated).await
    }

    /// Deletes an existing request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NotFound`] when no request exists under
    /// `id`, or [`RequestError::Database`] if the store fails.
    pub async fn delete(&self, id: RequestId) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(RequestError::NotFound(id));
        }

        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::repository::InMemoryRequestRepository;
    use chrono::{TimeZone, Utc};

    fn service() -> RequestService {
        RequestService::new(Arc::new(InMemoryRequestRepository::new()))
    }

    fn sample(name: &str) -> SupportRequest {
        SupportRequest::new(name, "Printer jam", "Tray 2 keeps jamming")
    }

    #[tokio::test]
    async fn store_assigns_sequential_ids_from_one() {
        let service = service();

        let first = service.store(sample("Ada")).await.unwrap();
        let second = service.store(sample("Grace")).await.unwrap();

        assert_eq!(first.id, Some(RequestId::new(1)));
        assert_eq!(second.id, Some(RequestId::new(2)));
    }

    #[tokio::test]
    async fn store_fills_request_date() {
        let service = service();

        let stored = service.store(sample("Ada")).await.unwrap();

        assert!(stored.request_date.is_some());
    }

    #[tokio::test]
    async fn store_preserves_supplied_request_date() {
        let service = service();
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let request = SupportRequest {
            request_date: Some(date),
            ..sample("Ada")
        };

        let stored = service.store(request).await.unwrap();

        assert_eq!(stored.request_date, Some(date));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing() {
        let service = service();

        let found = service.find_by_id(RequestId::new(42)).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn get_all_returns_requests_in_id_order() {
        let service = service();
        service.store(sample("Ada")).await.unwrap();
        service.store(sample("Grace")).await.unwrap();
        service.store(sample("Edsger")).await.unwrap();

        let all = service.get_all().await.unwrap();

        let ids: Vec<_> = all.iter().filter_map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![RequestId::new(1), RequestId::new(2), RequestId::new(3)]
        );
    }

    #[tokio::test]
    async fn update_replaces_text_fields_only() {
        let service = service();
        let stored = service.store(sample("Ada")).await.unwrap();
        let id = stored.id.unwrap();

        let replacement = SupportRequest {
            request_date: Some(Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap()),
            ..SupportRequest::new("Grace", "Monitor flicker", "External monitor flickers")
        };
        let updated = service.update(id, replacement).await.unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.request_name, "Grace");
        assert_eq!(updated.subject, "Monitor flicker");
        assert_eq!(updated.description, "External monitor flickers");
        assert_eq!(
            updated.request_date, stored.request_date,
            "the stored date wins over the caller's"
        );
    }

    #[tokio::test]
    async fn update_missing_request_is_not_found() {
        let service = service();

        let err = service
            .update(RequestId::new(99), sample("Ada"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Request not found with id 99");
    }

    #[tokio::test]
    async fn delete_removes_request() {
        let service = service();
        let stored = service.store(sample("Ada")).await.unwrap();
        let id = stored.id.unwrap();

        service.delete(id).await.unwrap();

        assert_eq!(service.find_by_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_missing_request_is_not_found() {
        let service = service();

        let err = service.delete(RequestId::new(7)).await.unwrap_err();

        assert_eq!(err, RequestError::NotFound(RequestId::new(7)));
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let service = service();
        let stored = service.store(sample("Ada")).await.unwrap();
        let id = stored.id.unwrap();

        service.delete(id).await.unwrap();
        let err = service.delete(id).await.unwrap_err();

        assert_eq!(err, RequestError::NotFound(id));
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() {
        let service = service();
        let first = service.store(sample("Ada")).await.unwrap();
        service.delete(first.id.unwrap()).await.unwrap();

        let second = service.store(sample("Grace")).await.unwrap();

        assert_eq!(second.id, Some(RequestId::new(2)));
    }
}
