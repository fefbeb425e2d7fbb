//! Support request entity and its identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a support request.
///
/// Identifiers are assigned by the store on first save, start at 1, and are
/// never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub i64);

impl RequestId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A support request raised by a user.
///
/// Both `id` and `request_date` are `None` until the entity is persisted:
/// the store assigns the identifier, and fills in the creation instant when
/// the caller did not supply one. The three text fields are required to be
/// non-blank; that constraint is enforced at the HTTP boundary, not here.
///
/// Serializes to camelCase JSON:
///
/// ```json
/// {
///   "id": 1,
///   "requestName": "Jane Doe",
///   "subject": "Cannot log in",
///   "description": "Password reset loops forever",
///   "requestDate": "2024-05-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    /// Store-assigned identifier; `None` before persistence.
    #[serde(default)]
    pub id: Option<RequestId>,
    /// Name of the person raising the request.
    pub request_name: String,
    /// Short summary of the problem.
    pub subject: String,
    /// Full description of the problem.
    pub description: String,
    /// When the request was raised; filled by the store when unset.
    #[serde(default)]
    pub request_date: Option<DateTime<Utc>>,
}

impl SupportRequest {
    /// Create a new, unpersisted support request.
    #[must_use]
    pub fn new(
        request_name: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            request_name: request_name.into(),
            subject: subject.into(),
            description: description.into(),
            request_date: None,
        }
    }
}
