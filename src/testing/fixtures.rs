//! Test fixtures and utilities

use std::sync::Arc;

use crate::context::{RequestContext, RequestIdAllocator, Session};
use crate::event::{LogEvent, LogProperty, PropertyValue};

/// In-memory log event for testing pipeline integrations.
///
/// Properties keep insertion order; the idempotent-merge rule is enforced
/// the same way a real pipeline's event would enforce it.
#[derive(Debug, Clone, Default)]
pub struct MemoryEvent {
    properties: Vec<LogProperty>,
}

impl MemoryEvent {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    pub fn properties(&self) -> &[LogProperty] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|property| property.name() == name)
            .map(LogProperty::value)
    }
}

impl LogEvent for MemoryEvent {
    fn add_property_if_absent(&mut self, property: LogProperty) {
        if self.property(property.name()).is_none() {
            self.properties.push(property);
        }
    }
}

/// Create a fresh allocator shared the way a host process would share it
pub fn test_allocator() -> Arc<RequestIdAllocator> {
    Arc::new(RequestIdAllocator::new())
}

/// Create a request context without a session
pub fn test_request_context() -> RequestContext {
    RequestContext::new()
}

/// Create a request context with the given session identifier
pub fn test_session_context(session_id: &str) -> RequestContext {
    RequestContext::new().with_session(Session::new(session_id))
}
