//! Request payload validation.
//!
//! Create and update endpoints accept the same JSON payload; both reject
//! requests whose text fields are missing or blank, reporting every bad
//! field in one response.

use crate::error::{ApiError, FieldErrors};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use support_app_core::SupportRequest;

/// Incoming payload for the create and update endpoints.
///
/// All fields are optional at the wire level so validation can report
/// every missing field at once instead of failing on the first.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportRequestPayload {
    /// Name of the person raising the request.
    pub request_name: Option<String>,
    /// Short summary of the issue.
    pub subject: Option<String>,
    /// Full description of the issue.
    pub description: Option<String>,
    /// Optional explicit request timestamp.
    pub request_date: Option<DateTime<Utc>>,
}

impl SupportRequestPayload {
    /// Validate the payload and convert it into an unpersisted request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] listing every missing or blank
    /// text field as `"must not be blank"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use support_app_server::validation::SupportRequestPayload;
    ///
    /// let empty = SupportRequestPayload::default();
    /// assert!(empty.into_validated().is_err());
    /// ```
    pub fn into_validated(self) -> Result<SupportRequest, ApiError> {
        let mut errors = FieldErrors::new();

        let request_name = require_text(self.request_name, "requestName", &mut errors);
        let subject = require_text(self.subject, "subject", &mut errors);
        let description = require_text(self.description, "description", &mut errors);

        if !errors.is_empty() {
            return Err(ApiError::validation(errors));
        }

        Ok(SupportRequest {
            id: None,
            request_name,
            subject,
            description,
            request_date: self.request_date,
        })
    }
}

/// Record a "must not be blank" error unless the value has visible text.
fn require_text(value: Option<String>, field: &'static str, errors: &mut FieldErrors) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            errors.insert(field, "must not be blank");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use chrono::TimeZone;

    fn full_payload() -> SupportRequestPayload {
        SupportRequestPayload {
            request_name: Some("Ada".to_string()),
            subject: Some("Printer jam".to_string()),
            description: Some("Tray 2 keeps jamming".to_string()),
            request_date: None,
        }
    }

    fn field_errors(payload: SupportRequestPayload) -> FieldErrors {
        match payload.into_validated().unwrap_err() {
            ApiError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn accepts_a_full_payload() {
        let request = full_payload().into_validated().unwrap();

        assert_eq!(request.id, None);
        assert_eq!(request.request_name, "Ada");
        assert_eq!(request.subject, "Printer jam");
        assert_eq!(request.description, "Tray 2 keeps jamming");
        assert_eq!(request.request_date, None);
    }

    #[test]
    fn preserves_an_explicit_request_date() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let payload = SupportRequestPayload {
            request_date: Some(date),
            ..full_payload()
        };

        let request = payload.into_validated().unwrap();

        assert_eq!(request.request_date, Some(date));
    }

    #[test]
    fn rejects_a_missing_field() {
        let payload = SupportRequestPayload {
            subject: None,
            ..full_payload()
        };

        let errors = field_errors(payload);

        assert_eq!(errors.get("subject"), Some(&"must not be blank"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn rejects_a_whitespace_only_field() {
        let payload = SupportRequestPayload {
            request_name: Some("   ".to_string()),
            ..full_payload()
        };

        let errors = field_errors(payload);

        assert_eq!(errors.get("requestName"), Some(&"must not be blank"));
    }

    #[test]
    fn reports_every_blank_field_at_once() {
        let errors = field_errors(SupportRequestPayload::default());

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("requestName"), Some(&"must not be blank"));
        assert_eq!(errors.get("subject"), Some(&"must not be blank"));
        assert_eq!(errors.get("description"), Some(&"must not be blank"));
    }

    #[test]
    fn ignores_unknown_json_fields() {
        let payload: SupportRequestPayload = serde_json::from_str(
            r#"{"requestName":"Ada","subject":"s","description":"d","id":42}"#,
        )
        .unwrap();

        let request = payload.into_validated().unwrap();

        assert_eq!(request.id, None, "Wire ids are never trusted");
    }
}
