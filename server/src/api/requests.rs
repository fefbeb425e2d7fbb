//! Support request API endpoints.
//!
//! Provides CRUD operations for support requests:
//! - POST /api/support-requests - Create a new request
//! - GET /api/support-requests - List all requests
//! - GET /api/support-requests/:id - Get request details
//! - PUT /api/support-requests/:id - Update a request
//! - DELETE /api/support-requests/:id - Delete a request

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::SupportRequestPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use support_app_core::{RequestId, SupportRequest};

/// List all support requests, ordered by ascending id.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/api/support-requests
/// ```
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupportRequest>>, ApiError> {
    let requests = state.service.get_all().await?;

    Ok(Json(requests))
}

/// Get a single support request by id.
///
/// Responds 404 with an empty body when the id is unknown.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/api/support-requests/1
/// ```
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SupportRequest>, ApiError> {
    let request = state
        .service
        .find_by_id(RequestId::new(id))
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(request))
}

/// Create a new support request.
///
/// The payload must carry non-blank `requestName`, `subject`, and
/// `description` fields; `requestDate` is optional and defaults to the
/// time of creation. Responds 201 with the stored request.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/api/support-requests \
///   -H "Content-Type: application/json" \
///   -d '{
///     "requestName": "Ada",
///     "subject": "Printer jam",
///     "description": "Tray 2 keeps jamming"
///   }'
/// ```
pub async fn create_request(
    State(state): State<AppState>,
    Json(payload): Json<SupportRequestPayload>,
) -> Result<(StatusCode, Json<SupportRequest>), ApiError> {
    let request = payload.into_validated()?;

    let created = state.service.store(request).await.map_err(|e| {
        ApiError::internal(format!("Error creating request: {e}")).with_source(e.into())
    })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update the text fields of an existing support request.
///
/// The payload is validated exactly like create. The stored id and
/// `requestDate` are never changed. Responds 404 with an empty body when
/// the id is unknown.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/support-requests/1 \
///   -H "Content-Type: application/json" \
///   -d '{
///     "requestName": "Ada",
///     "subject": "Printer jam",
///     "description": "Tray 2 and tray 3 keep jamming"
///   }'
/// ```
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SupportRequestPayload>,
) -> Result<Json<SupportRequest>, ApiError> {
    let request = payload.into_validated()?;

    let updated = state.service.update(RequestId::new(id), request).await?;

    Ok(Json(updated))
}

/// Delete an existing support request.
///
/// Responds 204 on success and 404 with an empty body when the id is
/// unknown.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/support-requests/1
/// ```
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(RequestId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
