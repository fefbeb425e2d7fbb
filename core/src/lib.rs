//! Core domain for SupportApp: support request entities, the storage
//! abstraction they live behind, and the lifecycle service that enforces
//! the create/read/update/delete rules.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │       RequestService         │  ← lifecycle rules, existence checks
//! ├──────────────────────────────┤
//! │   dyn RequestRepository      │  ← capability trait
//! ├──────────────┬───────────────┤
//! │  InMemory    │  Postgres     │  ← swappable backends
//! │  (tests/dev) │  (production) │
//! └──────────────┴───────────────┘
//! ```
//!
//! The service deliberately exposes two result shapes: queries
//! ([`RequestService::find_by_id`]) report absence as `Ok(None)`, while
//! commands ([`RequestService::update`], [`RequestService::delete`]) fail
//! fast with [`RequestError::NotFound`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

// Re-export key types for convenience
pub use error::{RequestError, Result};
pub use model::{RequestId, SupportRequest};
pub use repository::{InMemoryRequestRepository, RequestRepository};
pub use service::RequestService;
