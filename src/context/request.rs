//! Per-request enrichment state.

use once_cell::sync::OnceCell;
use uuid::Uuid;

use super::allocator::RequestIdAllocator;

/// Handle to the active session of a request, if one exists.
///
/// The session itself (creation, storage, expiry) belongs to the host
/// server; this handle only carries the identifier that enrichment needs.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
}

impl Session {
    /// Wrap an externally assigned session identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Create a session with a freshly generated identifier.
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Request-scoped state passed explicitly to enrichers.
///
/// One context is created per inbound request by the host and dropped when
/// the request ends. The request ID slot is set at most once, on the first
/// enrichment call during the request; later calls reuse the stored value.
#[derive(Debug, Default)]
pub struct RequestContext {
    request_id: OnceCell<u64>,
    session: Option<Session>,
}

impl RequestContext {
    /// Create a context for a request with no active session.
    pub fn new() -> Self {
        Self {
            request_id: OnceCell::new(),
            session: None,
        }
    }

    /// Attach the request's active session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The request ID assigned to this request, if enrichment has run.
    pub fn request_id(&self) -> Option<u64> {
        self.request_id.get().copied()
    }

    /// The request ID for this request, allocating one on first touch.
    ///
    /// The slot is settled exactly once even if enrichment runs from
    /// multiple tasks of the same request; every call observes the same ID.
    pub fn request_id_or_allocate(&self, allocator: &RequestIdAllocator) -> u64 {
        *self.request_id.get_or_init(|| allocator.allocate())
    }
}
