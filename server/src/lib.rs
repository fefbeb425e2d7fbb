//! HTTP API server for SupportApp.
//!
//! Wires the support request lifecycle service to an Axum router.
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Payload validation** rejects blank text fields with a 400
//! 3. **Service call** applies the lifecycle rules over the repository
//! 4. **Response mapping** turns domain errors into HTTP statuses
//!
//! The binary wires the router to the `PostgreSQL` repository; the API
//! tests drive the same router over the in-memory one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod validation;

// Re-export key types for convenience
pub use config::Config;
pub use error::{ApiError, FieldErrors};
pub use server::{AppState, build_router};
