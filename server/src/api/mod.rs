//! API endpoints for SupportApp.
//!
//! This module contains all HTTP API handlers:
//! - Requests: CRUD operations for support requests

pub mod requests;

pub use requests::{create_request, delete_request, get_request, list_requests, update_request};
