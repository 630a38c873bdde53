//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::LinkService;
use crate::domain::context::OpContext;
use crate::domain::repositories::LinkRepository;

/// Default per-request deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<dyn LinkRepository>>, request_timeout: Duration) -> Self {
        Self {
            link_service,
            request_timeout,
        }
    }

    /// Fresh operation context carrying the request deadline.
    pub fn op_context(&self) -> OpContext {
        OpContext::with_timeout(self.request_timeout)
    }
}
