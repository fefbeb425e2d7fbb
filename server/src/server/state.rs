//! Application state shared across handlers.

use support_app_core::RequestService;

/// Shared application state.
///
/// Cloning is cheap: the service shares its repository behind an `Arc`,
/// so every handler sees the same store.
#[derive(Clone)]
pub struct AppState {
    /// Support request lifecycle service.
    pub service: RequestService,
}

impl AppState {
    /// Create application state backed by the given service.
    #[must_use]
    pub const fn new(service: RequestService) -> Self {
        Self { service }
    }
}
