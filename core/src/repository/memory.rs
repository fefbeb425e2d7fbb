//! In-memory request repository for testing and local development.

use crate::error::{RequestError, Result};
use crate::model::{RequestId, SupportRequest};
use crate::repository::RequestRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory request repository.
///
/// Stores requests in a `BTreeMap` keyed by id so listings come back
/// ordered by id. Identifiers are handed out by an atomic counter that
/// starts at 1 and only ever moves forward, so a deleted id is never
/// reassigned.
#[derive(Debug, Clone)]
pub struct InMemoryRequestRepository {
    requests: Arc<Mutex<BTreeMap<i64, SupportRequest>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryRequestRepository {
    /// Create an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn find_all(&self) -> Result<Vec<SupportRequest>> {
        let requests = self
            .requests
            .lock()
            .map_err(|_| RequestError::Database("request store lock poisoned".to_string()))?;

        Ok(requests.values().cloned().collect())
    }

    async fn find_by_id(&self, id: RequestId) -> Result<Option<SupportRequest>> {
        let requests = self
            .requests
            .lock()
            .map_err(|_| RequestError::Database("request store lock poisoned".to_string()))?;

        Ok(requests.get(&id.as_i64()).cloned())
    }

    async fn save(&self, request: SupportRequest) -> Result<SupportRequest> {
        let mut requests = self
            .requests
            .lock()
            .map_err(|_| RequestError::Database("request store lock poisoned".to_string()))?;

        let id = match request.id {
            Some(id) => {
                if !requests.contains_key(&id.as_i64()) {
                    return Err(RequestError::NotFound(id));
                }
                id
            }
            None => RequestId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
        };

        let stored = SupportRequest {
            id: Some(id),
            request_date: Some(request.request_date.unwrap_or_else(Utc::now)),
            ..request
        };

        requests.insert(id.as_i64(), stored.clone());

        Ok(stored)
    }

    async fn exists_by_id(&self, id: RequestId) -> Result<bool> {
        let requests = self
            .requests
            .lock()
            .map_err(|_| RequestError::Database("request store lock poisoned".to_string()))?;

        Ok(requests.contains_key(&id.as_i64()))
    }

    async fn delete_by_id(&self, id: RequestId) -> Result<()> {
        let mut requests = self
            .requests
            .lock()
            .map_err(|_| RequestError::Database("request store lock poisoned".to_string()))?;

        requests.remove(&id.as_i64());

        Ok(())
    }
}
